use crate::{
    context::FormattingContext,
    platform::PlatformAdapter,
    tag::{strip_quotes, Tag, TagState},
    tokenizer::find_first_colon_outside_quotes,
};
use protocol::datatypes::{ClickAction, ClickEvent};
use tracing::debug;

/// `<click:action:value>`. Every action name is also an alias, in which case the whole
/// argument is the value (`<url:https://example.com>`).
#[derive(Debug, Clone, Copy)]
pub struct ClickTag;

impl Tag for ClickTag {
    fn name(&self) -> &str {
        "click"
    }

    fn aliases(&self) -> &[&str] {
        &[
            "open_url",
            "url",
            "run_cmd",
            "execute",
            "exec",
            "suggest_command",
            "cmd",
            "suggest",
            "copy_to_clipboard",
            "copy",
            "change_page",
            "page",
            "run_command",
        ]
    }

    fn process(&self, ctx: &mut FormattingContext<'_>, name: &str, args: &str) -> TagState {
        let (action, value) = if name.trim().eq_ignore_ascii_case(self.name()) {
            match find_first_colon_outside_quotes(args) {
                Some(i) => (&args[..i], &args[i + 1..]),
                None => {
                    debug!("Click tag without a value: {args:?}");
                    return TagState::None;
                }
            }
        } else {
            (name, args)
        };

        let Some(event) = click_event(ctx.platform(), action, strip_quotes(value.trim())) else {
            debug!("Invalid click action {action:?} with value {value:?}");
            return TagState::None;
        };

        let style = ctx.current_style().clone().with_click(event);
        ctx.push_style(style);

        TagState::Pushed
    }

    fn close(&self, ctx: &mut FormattingContext<'_>, state: TagState) {
        if let TagState::Pushed = state {
            ctx.pop_style();
        }
    }
}

/// Builds the click event for an action name (or alias). `None` for unknown actions or an
/// empty value.
pub fn click_event(
    platform: &dyn PlatformAdapter,
    action: &str,
    value: &str,
) -> Option<ClickEvent> {
    if value.is_empty() {
        return None;
    }

    let (action, value) = match action.trim().to_ascii_lowercase().as_str() {
        "open_url" | "url" => (ClickAction::OpenUrl, normalize_url(value)),
        "run_cmd" | "run_command" => (
            ClickAction::RunCommand,
            value.trim_start_matches('/').to_owned(),
        ),
        "execute" | "exec" => (
            ClickAction::RunCommand,
            if value.starts_with('/') {
                value.to_owned()
            } else {
                format!("/{value}")
            },
        ),
        "suggest_command" | "cmd" | "suggest" => (ClickAction::SuggestCommand, value.to_owned()),
        "copy_to_clipboard" | "copy" => (ClickAction::CopyToClipboard, value.to_owned()),
        "change_page" | "page" => (ClickAction::ChangePage, value.to_owned()),
        _ => return None,
    };

    Some(platform.click_event(action, &value))
}

/// Adds `https://` to URLs without a scheme
pub fn normalize_url(url: &str) -> String {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        url.to_owned()
    } else {
        format!("https://{url}")
    }
}
