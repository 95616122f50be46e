pub mod prelude {
    pub use super::event_listener;
    pub use super::intersection_observer::{self, AddIntersectionObserver};
}

pub mod uuid {
    use std::str::FromStr;

    use tracing::error;
    use uuid::Uuid;
    use web_sys::Element;

    pub fn get_id(target: &Element, field_name: &str) -> Option<Uuid> {
        let Some(id) = target.get_attribute(field_name) else {
            error!("{} was not set on <{}>", field_name, target.tag_name());
            return None;
        };
        match Uuid::from_str(&id) {
            Ok(id) => Some(id),
            Err(err) => {
                error!("{} is invalid on <{}>: {}", field_name, target.tag_name(), err);
                None
            }
        }
    }

    pub fn set_id(target: &Element, field_name: &str, id: Uuid) {
        if let Err(err) = target.set_attribute(field_name, &id.to_string()) {
            error!("failed to set {}: {:?}", field_name, err);
        }
    }
}

pub mod intersection_observer {
    use std::collections::HashMap;
    use std::hash::{DefaultHasher, Hash, Hasher};

    use leptos::{html::ElementType, prelude::*};
    use ordered_float::OrderedFloat;
    use send_wrapper::SendWrapper;
    use tracing::{error, trace, trace_span, warn};
    use uuid::Uuid;
    use wasm_bindgen::prelude::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{
        js_sys::Array, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
        IntersectionObserverInit,
    };

    use super::uuid::{get_id, set_id};

    const ID_FIELD_NAME: &str = "data-cpscmz_intersection_observer_id";

    pub type Callback =
        Box<dyn FnMut(IntersectionObserverEntry, IntersectionObserver) + Send + Sync + 'static>;

    pub trait AddIntersectionObserver {
        fn observe_intersection_with_options<F>(&self, callback: F, options: Options)
        where
            F: FnMut(IntersectionObserverEntry, IntersectionObserver)
                + Send
                + Sync
                + Clone
                + 'static;
    }

    impl<E> AddIntersectionObserver for NodeRef<E>
    where
        E: ElementType,
        E::Output: JsCast + Clone + 'static + Into<HtmlElement>,
    {
        fn observe_intersection_with_options<F>(&self, callback: F, options: Options)
        where
            F: FnMut(IntersectionObserverEntry, IntersectionObserver)
                + Send
                + Sync
                + Clone
                + 'static,
        {
            new(self.clone(), callback, options);
        }
    }

    /// Observers are shared between every target that asks for the same options.
    #[derive(Default, Clone, Copy)]
    pub struct GlobalState {
        pub observers: StoredValue<HashMap<u64, SendWrapper<IntersectionObserver>>>,
        pub callbacks: StoredValue<HashMap<Uuid, Callback>>,
    }

    /// Viewport-rooted observer options.
    #[derive(Default, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Options {
        threshold: Option<OrderedFloat<f64>>,
    }

    impl Options {
        pub fn set_threshold(mut self, threshold: f64) -> Self {
            self.threshold = Some(OrderedFloat(threshold));
            self
        }

        pub fn key(&self) -> u64 {
            let mut hasher = DefaultHasher::new();
            self.hash(&mut hasher);
            hasher.finish()
        }

        fn to_init(&self) -> IntersectionObserverInit {
            let init = IntersectionObserverInit::new();
            if let Some(threshold) = self.threshold {
                trace!("threshold option set");
                init.set_threshold(&JsValue::from_f64(*threshold));
            }
            init
        }
    }

    pub fn init_global_state() -> GlobalState {
        let ctx = GlobalState::default();
        provide_context(ctx);
        ctx
    }

    pub fn new<E, F>(target: NodeRef<E>, callback: F, options: Options)
    where
        E: ElementType,
        E::Output: JsCast + Clone + 'static + Into<HtmlElement>,
        F: FnMut(IntersectionObserverEntry, IntersectionObserver) + Clone + Send + Sync + 'static,
    {
        let ctx = use_context::<GlobalState>().unwrap_or_else(init_global_state);
        let id = Uuid::new_v4();
        let key = options.key();

        Effect::new(move || {
            let span = trace_span!("intersection observer", "{}", &id).entered();

            let Some(target) = target.get() else {
                return;
            };
            let target: HtmlElement = target.into();

            set_id(&target, ID_FIELD_NAME, id);

            ctx.callbacks.update_value(|callbacks| {
                callbacks.insert(id, Box::new(callback.clone()));
                trace!("created callback");
            });

            ctx.observers.update_value(|observers| {
                if let Some(observer) = observers.get(&key) {
                    trace!("observer already exists");
                    observer.observe(&target);
                    return;
                }

                trace!("creating observer {}", key);
                let observer = match new_with_options_raw(
                    move |entries, observer| dispatch(ctx, entries, observer),
                    &options.to_init(),
                ) {
                    Ok(observer) => observer,
                    Err(err) => {
                        error!("failed to create observer: {:?}", err);
                        return;
                    }
                };
                observer.observe(&target);
                observers.insert(key, SendWrapper::new(observer));
            });

            span.exit();
        });

        on_cleanup(move || {
            let _span = trace_span!("intersection observer", "{}", &id).entered();

            if let Some(target) = target.get_untracked() {
                let target: HtmlElement = target.into();
                ctx.observers
                    .with_value(|observers| match observers.get(&key) {
                        Some(observer) => observer.unobserve(&target),
                        None => warn!("observer not found with key {} for {}", key, id),
                    });
            }

            ctx.callbacks.update_value(|callbacks| {
                if callbacks.remove(&id).is_some() {
                    trace!("removed {}", &id);
                }
            });
        });
    }

    fn dispatch(
        ctx: GlobalState,
        entries: Vec<IntersectionObserverEntry>,
        observer: IntersectionObserver,
    ) {
        ctx.callbacks.update_value(|callbacks| {
            for entry in entries {
                let Some(id) = get_id(&entry.target(), ID_FIELD_NAME) else {
                    continue;
                };
                let Some(callback) = callbacks.get_mut(&id) else {
                    continue;
                };
                callback(entry, observer.clone());
            }
        });
    }

    pub fn new_closure(
        mut callback: impl FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver) + 'static,
    ) -> JsValue {
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let entries: Vec<IntersectionObserverEntry> = entries
                    .to_vec()
                    .into_iter()
                    .map(|v| v.unchecked_into::<IntersectionObserverEntry>())
                    .collect();
                callback(entries, observer);
            },
        )
        .into_js_value()
    }

    pub fn new_with_options_raw<F>(
        callback: F,
        options: &IntersectionObserverInit,
    ) -> Result<IntersectionObserver, JsValue>
    where
        F: FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver) + 'static,
    {
        IntersectionObserver::new_with_options(
            new_closure(callback).as_ref().unchecked_ref(),
            options,
        )
    }

}

pub mod event_listener {
    use std::fmt::Debug;

    use leptos::{ev::EventDescriptor, prelude::*};
    use tracing::{trace, trace_span};
    use wasm_bindgen::JsCast;

    /// Attaches a listener to `window` for the lifetime of the current owner.
    pub fn new_window<T, F>(event: T, f: F)
    where
        T: EventDescriptor + Debug + Clone + 'static,
        T::EventType: JsCast,
        F: Fn(<T as EventDescriptor>::EventType) + Clone + 'static,
    {
        Effect::new(move || {
            let span = trace_span!("window event listener", "{}", event.name()).entered();

            let handle = window_event_listener(event.clone(), f.clone());
            trace!("added");

            on_cleanup(move || {
                handle.remove();
                trace!("removed");
            });

            span.exit();
        });
    }
}
