use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::ForceGraphState;
use super::types::{EdgeStyle, NodeStyle};

const BACKGROUND: &str = "#ffffff";
const SELECTED_STROKE: &str = "#f39191";

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (dash, gap) = (5.0 / k, 5.0 / k);
	let dash_offset = -(state.flow_time * 10.0) % (dash + gap);
	let t = ease_out_cubic(state.hover.highlight_t);

	state.graph.visit_edges(|n1, n2, _| {
		let Some(kind) = state.edge_kind(n1.index(), n2.index()) else {
			return;
		};
		let style = EdgeStyle::for_kind(kind);
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);

		let is_highlighted = state.is_highlighted(n1.index()) && state.is_highlighted(n2.index());
		// t=0: every edge at base alpha; t=1: highlighted edges up, the rest faded
		let (alpha, width) = if is_highlighted {
			(0.8 + 0.2 * t, style.width * (1.0 + 0.5 * t))
		} else {
			(0.8 - 0.6 * t, style.width)
		};

		let (r, g, b) = style.rgb;
		ctx.set_stroke_style_str(&format!("rgba({r}, {g}, {b}, {alpha})"));
		ctx.set_line_width(width / k);
		if style.dashed {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(dash),
				&JsValue::from_f64(gap),
			));
			ctx.set_line_dash_offset(dash_offset);
		} else {
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}

		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	});
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t, k) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
		state.transform.k,
	);

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let view = &node.data.user_data;
		let style = NodeStyle::for_role(view.role);
		let (x, y) = (node.x() as f64, node.y() as f64);

		let (alpha, radius) = if !has_highlight || state.is_highlighted(idx) {
			let grow = if state.is_hovered(idx) { 0.3 * t } else { 0.0 };
			(1.0, style.radius * (1.0 + grow))
		} else {
			(1.0 - 0.6 * t, style.radius)
		};

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(style.fill);
		ctx.fill();

		if state.is_selected(idx) {
			ctx.set_stroke_style_str(SELECTED_STROKE);
			ctx.set_line_width(3.0 / k);
		} else {
			ctx.set_stroke_style_str(style.stroke);
			ctx.set_line_width(style.stroke_width / k);
		}
		ctx.stroke();

		ctx.set_fill_style_str("#333333");
		ctx.set_text_align("center");
		ctx.set_font(&format!("bold {}px sans-serif", 9.0 / k.max(0.5)));
		let _ = ctx.fill_text(&view.label, x, y - radius - 4.0);
		if let Some(mac) = &view.mac_tail {
			ctx.set_fill_style_str("#666666");
			ctx.set_font(&format!("{}px sans-serif", 7.0 / k.max(0.5)));
			let _ = ctx.fill_text(mac, x, y + radius + 9.0);
		}
		ctx.set_global_alpha(1.0);
	});
}
