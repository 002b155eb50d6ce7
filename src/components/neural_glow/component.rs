use std::cell::RefCell;
use std::rc::Rc;

use glam::DVec2;
use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, Event, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window,
};

use super::clock::FrameClock;
use super::error::SurfaceError;
use super::input::{InputEvent, InputQueue, client_to_canvas};
use super::params::GlowParams;
use super::render;
use super::state::NeuralGlowState;
use super::surface::CanvasSurface;

type EventQueue = Rc<RefCell<InputQueue>>;

fn mount_surface(
	canvas: &HtmlCanvasElement,
	params: &GlowParams,
) -> Result<(Window, CanvasSurface), SurfaceError> {
	let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
	canvas.set_width(params.width as u32);
	canvas.set_height(params.height as u32);
	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")
		.map_err(|e| SurfaceError::Context(format!("{e:?}")))?
		.ok_or_else(|| SurfaceError::Context("canvas has no 2d context".into()))?
		.dyn_into()
		.map_err(|_| SurfaceError::Context("context is not 2d".into()))?;
	Ok((window, CanvasSurface::new(ctx, params.width, params.height)))
}

/// Full-frame canvas running the glowing network until Escape or page exit.
#[component]
pub fn NeuralGlowCanvas() -> impl IntoView {
	let params = GlowParams::default();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let events: EventQueue = Rc::new(RefCell::new(InputQueue::default()));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
	let on_key: Rc<RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>> =
		Rc::new(RefCell::new(None));
	let on_pagehide: Rc<RefCell<Option<Closure<dyn FnMut(Event)>>>> =
		Rc::new(RefCell::new(None));
	let (events_init, animate_init, params_init) = (events.clone(), animate.clone(), params.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (window, mut surface) = match mount_surface(&canvas, &params_init) {
			Ok(mounted) => mounted,
			Err(err) => {
				log::error!("Cannot start animation: {err}");
				return;
			}
		};

		let events_key = events_init.clone();
		*on_key.borrow_mut() = Some(Closure::new(move |ev: KeyboardEvent| {
			if let Some(event) = InputEvent::from_key(&ev.key()) {
				events_key.borrow_mut().push(event);
			}
		}));
		if let Some(ref cb) = *on_key.borrow() {
			let _ = window.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
		}

		let events_hide = events_init.clone();
		*on_pagehide.borrow_mut() = Some(Closure::new(move |_: Event| {
			events_hide.borrow_mut().push(InputEvent::Quit);
		}));
		if let Some(ref cb) = *on_pagehide.borrow() {
			let _ =
				window.add_event_listener_with_callback("pagehide", cb.as_ref().unchecked_ref());
		}

		let mut state = NeuralGlowState::new(params_init.clone(), SmallRng::from_entropy());
		let mut clock = FrameClock::new(params_init.fps);
		let (events_anim, animate_inner) = (events_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move |now: f64| {
			if clock.admit(now) {
				let pending = events_anim.borrow_mut().drain();
				state.update(pending);
				render::render(&state, &mut surface);
				if !state.running {
					events_anim.borrow_mut().close();
					log::info!("Animation stopped");
					return;
				}
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let (width, height) = (params.width, params.height);
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let point = client_to_canvas(
			DVec2::new(ev.client_x() as f64, ev.client_y() as f64),
			(rect.left(), rect.top(), rect.width(), rect.height()),
			DVec2::new(width, height),
		);
		events.borrow_mut().push(InputEvent::PointerPress(point));
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="neural-glow-canvas"
			on:mousedown=on_mousedown
			style="display: block; margin: 0 auto; max-width: 100vw; max-height: 100vh; background: black;"
		/>
	}
}
