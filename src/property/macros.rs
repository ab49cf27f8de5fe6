use crate::messages::MessageBundle;
use crate::resource::RequestContext;

const KEY_PREFIX: &str = "key.";

/// Expands `%(name)` and `${name}` macros in configuration texts.
///
/// Known macros are `key.<KEY>` (looked up in the message bundle),
/// `currentuser.name`, `request.locale` and `request.siteroot`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacroResolver<'a> {
    ctx: Option<&'a RequestContext>,
    messages: Option<&'a MessageBundle>,
    keep_empty_macros: bool,
}

impl<'a> MacroResolver<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_context(mut self, ctx: &'a RequestContext) -> Self {
        self.ctx = Some(ctx);
        self
    }

    #[must_use]
    pub fn with_messages(mut self, messages: &'a MessageBundle) -> Self {
        self.messages = Some(messages);
        self
    }

    /// Keep unresolvable macros verbatim instead of removing them.
    #[must_use]
    pub fn keep_empty_macros(mut self, keep: bool) -> Self {
        self.keep_empty_macros = keep;
        self
    }

    #[must_use]
    pub fn resolve_macros(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut rest = input;
        while let Some((start, opener, closer)) = next_macro(rest) {
            let (before, tail) = rest.split_at(start);
            output.push_str(before);
            let body = tail.strip_prefix(opener).unwrap_or(tail);
            let Some((name, after)) = body.split_once(closer) else {
                // unterminated macro
                output.push_str(tail);
                return output;
            };
            match self.macro_value(name.trim()) {
                Some(value) => output.push_str(&value),
                None if self.keep_empty_macros => {
                    output.push_str(opener);
                    output.push_str(name);
                    output.push(closer);
                }
                None => {}
            }
            rest = after;
        }
        output.push_str(rest);
        output
    }

    #[must_use]
    pub fn resolve_opt(&self, input: Option<&str>) -> Option<String> {
        input.map(|text| self.resolve_macros(text))
    }

    fn macro_value(&self, name: &str) -> Option<String> {
        if let Some(key) = name.strip_prefix(KEY_PREFIX) {
            return self
                .messages
                .filter(|bundle| bundle.contains(key))
                .map(|bundle| bundle.key(key));
        }
        let ctx = self.ctx?;
        match name {
            "currentuser.name" => Some(ctx.user.clone()),
            "request.locale" => Some(ctx.locale.clone()),
            "request.siteroot" => Some(ctx.site_root.clone()),
            _ => None,
        }
    }
}

/// Byte offset, opener and closer of the first macro in `text`.
fn next_macro(text: &str) -> Option<(usize, &'static str, char)> {
    let percent = text.find("%(").map(|i| (i, "%(", ')'));
    let dollar = text.find("${").map(|i| (i, "${", '}'));
    match (percent, dollar) {
        (Some(p), Some(d)) => Some(if p.0 <= d.0 { p } else { d }),
        (p, d) => p.or(d),
    }
}
