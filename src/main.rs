//! Ball Canvas entry point
//!
//! On the web: wires the canvas, pointer listeners and the add/recolor forms,
//! then runs the animation-frame loop. Natively: runs the simulation headless.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_demo {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, HtmlInputElement, MouseEvent};

    use ball_canvas::Settings;
    use ball_canvas::platform::{CanvasSurface, canvas_position};
    use ball_canvas::sim::{PointerEvent, World, frame};

    /// Background tint while the add-ball popup is open
    const ADDING_BACKGROUND: &str = "rgb(195, 192, 192)";

    /// Demo instance shared by the frame loop and DOM listeners
    struct Demo {
        world: World,
        surface: CanvasSurface,
    }

    impl Demo {
        fn pointer(&mut self, event: &MouseEvent, make: fn(glam::Vec2) -> PointerEvent) {
            let p = canvas_position(self.surface.canvas(), event);
            self.world.handle_pointer(make(p));
        }

        /// Show the recolor picker only while a ball is selected
        fn sync_color_picker(&self) {
            match self.world.selected_ball() {
                Some(ball) => {
                    if let Some(input) = input_by_id("ball-color") {
                        input.set_value(&ball.color);
                    }
                    set_visible("ball-color-picker", true);
                }
                None => set_visible("ball-color-picker", false),
            }
        }

        /// Reflect the add-ball draft in the popup and page background
        fn sync_add_popup(&self) {
            let draft = self.world.pending_add.as_ref();
            if let Some(draft) = draft {
                if let Some(input) = input_by_id("new-ball-color") {
                    input.set_value(&draft.color);
                }
                if let Some(input) = input_by_id("new-ball-size") {
                    input.set_value(&draft.size.to_string());
                }
            }
            set_visible("add-ball-popup", draft.is_some());
            set_body_background(if draft.is_some() { ADDING_BACKGROUND } else { "" });
        }
    }

    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }

    fn element_by_id(id: &str) -> Option<Element> {
        document()?.get_element_by_id(id)
    }

    fn input_by_id(id: &str) -> Option<HtmlInputElement> {
        element_by_id(id)?.dyn_into().ok()
    }

    fn set_visible(id: &str, visible: bool) {
        if let Some(el) = element_by_id(id) {
            let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
        }
    }

    fn set_body_background(color: &str) {
        if let Some(body) = document().and_then(|d| d.body()) {
            let _ = body.style().set_property("background-color", color);
        }
    }

    /// Attach a click handler to the element with `id`, if it exists
    fn on_click(id: &str, demo: &Rc<RefCell<Demo>>, handler: fn(&mut Demo)) {
        let Some(el) = element_by_id(id) else {
            log::warn!("Missing #{}, control disabled", id);
            return;
        };
        let demo = demo.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            handler(&mut demo.borrow_mut());
        });
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Attach an input handler receiving the input's current value
    fn on_input(id: &str, demo: &Rc<RefCell<Demo>>, handler: fn(&mut Demo, &str)) {
        let Some(input) = input_by_id(id) else {
            log::warn!("Missing #{}, control disabled", id);
            return;
        };
        let demo = demo.clone();
        let input_clone = input.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            handler(&mut demo.borrow_mut(), &input_clone.value());
        });
        let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let settings = Settings::load();
        let level = settings.log_level().to_level().unwrap_or(log::Level::Error);
        if console_log::init_with_level(level).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Ball Canvas starting...");

        let Some(canvas) = element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element, nothing to run");
            return;
        };
        let (width, height) = settings.surface_size();
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let Some(surface) = CanvasSurface::new(canvas.clone()) else {
            log::error!("Canvas has no 2-D context, nothing to run");
            return;
        };

        let seed = settings.seed_or(js_sys::Date::now() as u64);
        let world = World::from_settings(&settings, seed);
        log::info!("World initialized with {} balls, seed {}", world.balls.len(), seed);

        let demo = Rc::new(RefCell::new(Demo { world, surface }));

        setup_pointer_handlers(&canvas, &demo);
        setup_add_form(&demo);
        setup_color_picker(&demo);

        demo.borrow().sync_add_popup();
        demo.borrow().sync_color_picker();

        request_animation_frame(demo);

        log::info!("Ball Canvas running!");
    }

    fn setup_pointer_handlers(canvas: &HtmlCanvasElement, demo: &Rc<RefCell<Demo>>) {
        // Press, drag and click are bound on the canvas
        for (event_name, make) in [
            ("mousedown", PointerEvent::Down as fn(glam::Vec2) -> PointerEvent),
            ("mousemove", PointerEvent::Move),
        ] {
            let demo = demo.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                demo.borrow_mut().pointer(&event, make);
            });
            let _ = canvas
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let demo = demo.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut d = demo.borrow_mut();
                d.pointer(&event, PointerEvent::Click);
                d.sync_color_picker();
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Release on the window so letting go outside the canvas still flings
        {
            let demo = demo.clone();
            let Some(window) = web_sys::window() else {
                return;
            };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                demo.borrow_mut().pointer(&event, PointerEvent::Up);
            });
            let _ = window
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_add_form(demo: &Rc<RefCell<Demo>>) {
        on_click("add-ball-btn", demo, |d| {
            d.world.begin_add();
            d.sync_add_popup();
        });
        on_input("new-ball-color", demo, |d, value| d.world.set_draft_color(value));
        on_input("new-ball-size", demo, |d, value| d.world.set_draft_size(value));
        on_click("add-ball-ok", demo, |d| {
            if let Some(id) = d.world.confirm_add() {
                log::info!("Ball {} added ({} total)", id, d.world.balls.len());
            }
            d.sync_add_popup();
        });
        on_click("add-ball-cancel", demo, |d| {
            d.world.cancel_add();
            d.sync_add_popup();
        });
    }

    fn setup_color_picker(demo: &Rc<RefCell<Demo>>) {
        on_input("ball-color", demo, |d, value| {
            d.world.recolor_selected(value);
            d.sync_color_picker();
        });
    }

    fn request_animation_frame(demo: Rc<RefCell<Demo>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            frame_loop(demo);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(demo: Rc<RefCell<Demo>>) {
        {
            let mut d = demo.borrow_mut();
            let Demo { world, surface } = &mut *d;
            frame(world, surface);
        }

        request_animation_frame(demo);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_demo::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ball_canvas::sim::{PointerEvent, World, frame};
    use ball_canvas::{RecordingSurface, Settings};
    use glam::Vec2;

    /// Seed used when settings don't pin one
    const NATIVE_SEED: u64 = 0x5eed;

    let settings = Settings::load();
    env_logger::Builder::new()
        .filter_level(settings.log_level())
        .parse_default_env()
        .init();

    log::info!("Ball Canvas (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 for the interactive version");

    let frames: usize = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(600);

    let mut world = World::from_settings(&settings, settings.seed_or(NATIVE_SEED));
    let (width, height) = settings.surface_size();
    let mut surface = RecordingSurface::new(width, height);

    // Scripted session: add a ball, then fling the first seed ball
    world.begin_add();
    world.set_draft_color("orange");
    world.confirm_add();
    if let Some(first) = world.balls.first().map(|b| b.pos) {
        world.handle_pointer(PointerEvent::Down(first));
        world.handle_pointer(PointerEvent::Move(first + Vec2::new(-40.0, 20.0)));
        world.handle_pointer(PointerEvent::Up(first + Vec2::new(-80.0, 40.0)));
    }

    let mut collisions = 0;
    for _ in 0..frames {
        collisions += frame(&mut world, &mut surface).collisions;
        surface.take_commands();
    }

    log::info!(
        "Ran {} frames with {} balls, {} collisions resolved",
        frames,
        world.balls.len(),
        collisions
    );
    match serde_json::to_string_pretty(&world.balls) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize final state: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
