//! Error types shared by the HTTP layer and the topology builder.

use thiserror::Error;

use crate::topology::Rloc16;

/// Failure talking to the border router agent.
#[derive(Debug, Error)]
pub enum ApiError {
	/// Request could not be sent, or the body could not be encoded or decoded.
	#[error("request failed: {0}")]
	Transport(#[from] gloo_net::Error),
	/// Non-success HTTP status.
	#[error("unexpected HTTP status {0}")]
	Status(u16),
	/// The envelope carried a non-zero error.
	#[error("agent rejected request (error {code}): {message}")]
	Rejected {
		/// Agent error code.
		code: i64,
		/// Agent message, empty when none was sent.
		message: String,
	},
	/// The envelope reported success without a result.
	#[error("agent returned no result")]
	Empty,
}

/// Problems found while deriving the topology graph. These are logged, never surfaced to the page.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
	/// Parent locator plus child id does not fit in 16 bits.
	#[error("child {child_id} of router {parent} overflows the 16-bit locator space")]
	LocatorOverflow {
		/// Locator of the reporting router.
		parent: Rloc16,
		/// Child id from its child table.
		child_id: u16,
	},
}
