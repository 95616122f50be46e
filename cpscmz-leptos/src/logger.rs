use tracing::level_filters::LevelFilter;
use tracing::{span, Level, Metadata, Subscriber};
use tracing_subscriber::fmt::format::{PrettyVisitor, Writer};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{Layer, Registry};
use wasm_bindgen::prelude::*;

/// Recorded fields of a span, rendered once when the span is created.
struct SpanFields(String);

/// Sends tracing events to the browser console.
///
/// Warnings and errors go to `console.warn` / `console.error` with their source
/// location; everything below `max_level` is dropped before it is formatted.
pub struct ConsoleLayer {
    max_level: LevelFilter,
}

impl ConsoleLayer {
    pub fn new(max_level: LevelFilter) -> Self {
        Self { max_level }
    }

    pub fn allows(&self, level: &Level) -> bool {
        self.max_level >= *level
    }
}

/// `trace!` from the scroll and observer paths is only printed in debug builds.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::TRACE
    } else {
        LevelFilter::INFO
    }
}

pub fn simple_logger_init() {
    let subscriber = Registry::default().with(ConsoleLayer::new(default_level()));
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        console_log(&format!("console logger was not installed: {}", err));
    }
}

fn span_chain<S>(ctx: &Context<'_, S>) -> String
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let Some(current) = ctx.lookup_current() else {
        return String::new();
    };

    current
        .scope()
        .from_root()
        .map(|span| match span.extensions().get::<SpanFields>() {
            Some(fields) => format!("{}({})", span.name(), fields.0),
            None => span.name().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" > ")
}

fn origin(meta: &Metadata<'_>) -> Option<String> {
    Some(format!("{}:{}", meta.file()?, meta.line()?))
}

impl<S> Layer<S> for ConsoleLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        self.allows(metadata.level())
    }

    fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &span::Id, ctx: Context<'_, S>) {
        let mut fields = String::new();
        attrs.record(&mut PrettyVisitor::new(Writer::new(&mut fields), true));
        if fields.is_empty() {
            return;
        }
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(SpanFields(fields));
        }
    }

    fn on_event(&self, event: &tracing::Event<'_>, ctx: Context<'_, S>) {
        let meta = event.metadata();
        let level = *meta.level();
        if !self.allows(&level) {
            return;
        }

        let mut message = String::new();
        event.record(&mut PrettyVisitor::new(Writer::new(&mut message), true));

        let spans = span_chain(&ctx);
        let line = format!("%c{level}%c {spans}%c: {message}");
        let style = level_style(level);
        let spans_style = "color: gray; font-style: italic";
        let body_style = "color: inherit";

        match level {
            Level::ERROR => {
                let origin = origin(meta).unwrap_or_default();
                console_error(&line, style, spans_style, body_style, &origin);
            }
            Level::WARN => {
                let origin = origin(meta).unwrap_or_default();
                console_warn(&line, style, spans_style, body_style, &origin);
            }
            _ => console_styled(&line, style, spans_style, body_style),
        }
    }
}

pub fn level_style(level: Level) -> &'static str {
    match level {
        Level::TRACE => "color: dodgerblue; background: #444",
        Level::DEBUG => "color: lawngreen; background: #444",
        Level::INFO => "color: whitesmoke; background: #444",
        Level::WARN => "color: orange; background: #444",
        Level::ERROR => "color: red; background: #444",
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(message: &str);
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_styled(message: &str, level: &str, spans: &str, body: &str);
    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(message: &str, level: &str, spans: &str, body: &str, origin: &str);
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(message: &str, level: &str, spans: &str, body: &str, origin: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_level_drops_trace() {
        let layer = ConsoleLayer::new(LevelFilter::INFO);
        assert!(!layer.allows(&Level::TRACE));
        assert!(!layer.allows(&Level::DEBUG));
        assert!(layer.allows(&Level::INFO));
        assert!(layer.allows(&Level::ERROR));
    }

    #[test]
    fn off_drops_everything() {
        let layer = ConsoleLayer::new(LevelFilter::OFF);
        assert!(!layer.allows(&Level::ERROR));
    }

    #[test]
    fn debug_builds_keep_trace() {
        assert_eq!(default_level() == LevelFilter::TRACE, cfg!(debug_assertions));
    }
}
