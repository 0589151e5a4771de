use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>,
    modal_style: Option<String>,
    modal_class: Option<String>,
}

/// A handle returned by `ModalStackService::push`.
///
/// Can be cloned and used inside event handlers to close the modal.
#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Centralized modal stack.
///
/// - Supports push/close/pop
/// - Escape closes only the topmost modal (handled by `ModalHost`)
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    fn defer(&self, f: impl FnOnce(ModalStackService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            // Defer to next tick to avoid "closure invoked ... after being dropped"
            // when a modal is removed synchronously during the originating DOM
            // event dispatch.
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn is_open(&self) -> bool {
        !self.stack.get().is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.get().len()
    }

    /// Push a new modal onto the stack.
    ///
    /// `builder` receives a `ModalHandle` so the modal can close itself.
    pub fn push<F>(&self, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_with_frame(None, None, builder)
    }

    /// Push a new modal with style/class overrides for the modal surface.
    pub fn push_with_frame<F>(
        &self,
        modal_style: Option<String>,
        modal_class: Option<String>,
        builder: F,
    ) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let handle = ModalHandle { id, svc: *self };
        let builder = Arc::new(builder) as Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder,
                modal_style,
                modal_class,
            });
        });

        handle
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| {
            s.retain(|e| e.id != id);
        });
    }

    pub fn close_deferred(&self, id: u64) {
        self.defer(move |svc| svc.close(id));
    }

    pub fn pop(&self) {
        self.stack.update(|s| {
            s.pop();
        });
    }

    pub fn pop_deferred(&self) {
        self.defer(|svc| svc.pop());
    }

    pub fn clear(&self) {
        self.stack.set(Vec::new());
    }
}

/// Renders the modal stack at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>().expect("ModalStackService not found in context");

    // Escape closes the topmost modal
    Effect::new(move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let handler = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if event.key() == "Escape" && svc.is_open() {
                svc.pop_deferred();
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        let _ = window.add_event_listener_with_callback(
            "keydown",
            handler.as_ref().unchecked_ref::<js_sys::Function>(),
        );
        handler.forget();
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each=move || svc.stack.get()
                key=|entry| entry.id
                children=move |entry: ModalEntry| {
                    let handle = ModalHandle { id: entry.id, svc };
                    let view = (entry.builder)(handle.clone());

                    let index = svc
                        .stack
                        .with_untracked(|s| s.iter().position(|e| e.id == entry.id).unwrap_or(0));
                    let z_index = 1000 + (index as i32) * 10;

                    let on_close = Callback::new(move |_| {
                        handle.close();
                    });
                    let modal_style = entry.modal_style.clone().unwrap_or_default();
                    let modal_class = entry.modal_class.clone().unwrap_or_default();

                    view! {
                        <ModalFrame
                            z_index=z_index
                            on_close=on_close
                            modal_style=modal_style
                            modal_class=modal_class
                        >
                            {view}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}
