use crate::{
    config::FormattingConfig, parser::FormattingParser, platform::PlatformAdapter, player::Player,
};
use protocol::datatypes::{Chat, Style};
use std::mem;

/// The mutable state of a single [`FormattingParser::parse`] call
#[derive(Debug)]
pub struct FormattingContext<'p> {
    root: Chat,
    /// Append targets above the root, innermost last
    components: Vec<Chat>,
    base_style: Style,
    /// Pushed styles, the current style is the last one (or the base style)
    styles: Vec<Style>,
    /// Component depths of the open center regions
    centers: Vec<usize>,
    nesting_level: usize,
    /// How many parses are running below this one, see [`FormattingParser::parse_nested`]
    depth: usize,
    player: Option<&'p Player>,
    parser: &'p FormattingParser,
}

impl<'p> FormattingContext<'p> {
    pub fn new(parser: &'p FormattingParser, player: Option<&'p Player>) -> Self {
        Self::with_depth(parser, player, 0)
    }

    pub fn with_depth(
        parser: &'p FormattingParser,
        player: Option<&'p Player>,
        depth: usize,
    ) -> Self {
        Self {
            root: Chat::new(),
            components: Vec::new(),
            base_style: Style::new(),
            styles: Vec::new(),
            centers: Vec::new(),
            nesting_level: 0,
            depth,
            player,
            parser,
        }
    }

    pub fn parser(&self) -> &'p FormattingParser {
        self.parser
    }

    pub fn platform(&self) -> &'p dyn PlatformAdapter {
        self.parser.adapter()
    }

    pub fn config(&self) -> &'p FormattingConfig {
        self.parser.config()
    }

    pub fn player(&self) -> Option<&'p Player> {
        self.player
    }

    pub fn nesting_level(&self) -> usize {
        self.nesting_level
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn current_style(&self) -> &Style {
        self.styles.last().unwrap_or(&self.base_style)
    }

    /// Legacy `&` codes modify the current style in place
    pub fn current_style_mut(&mut self) -> &mut Style {
        match self.styles.last_mut() {
            Some(style) => style,
            None => &mut self.base_style,
        }
    }

    pub fn push_style(&mut self, style: Style) {
        self.styles.push(style);
        self.nesting_level += 1;
    }

    /// Never pops the base style
    pub fn pop_style(&mut self) {
        if self.nesting_level == 0 || self.styles.is_empty() {
            return;
        }

        self.styles.pop();
        self.nesting_level -= 1;
    }

    /// Pushes `style` and also applies it to the current component itself. Returns the
    /// component's previous style.
    pub fn apply_style_to_scope(&mut self, style: Style) -> Style {
        let previous = mem::replace(&mut self.current_component_mut().style, style.clone());
        self.push_style(style);
        previous
    }

    /// Undoes [`FormattingContext::apply_style_to_scope`]
    pub fn restore_scope_style(&mut self, previous: Style) {
        self.pop_style();
        self.current_component_mut().style = previous;
    }

    pub fn current_component_mut(&mut self) -> &mut Chat {
        match self.components.last_mut() {
            Some(component) => component,
            None => &mut self.root,
        }
    }

    /// Number of components above the root
    pub fn component_depth(&self) -> usize {
        self.components.len()
    }

    pub fn push_component(&mut self, component: Chat) {
        self.components.push(component);
    }

    /// `None` when only the root is left, which then stays the append target
    pub fn pop_component(&mut self) -> Option<Chat> {
        self.components.pop()
    }

    pub fn append(&mut self, node: Chat) {
        self.current_component_mut().append(node);
    }

    /// Starts collecting output in a fresh component. Returns its depth for
    /// [`FormattingContext::close_buffer`].
    pub fn open_buffer(&mut self) -> usize {
        self.push_component(Chat::new());
        self.component_depth()
    }

    /// Takes the component opened at `depth` off the stack. Anything opened above it and never
    /// closed is folded into it first.
    pub fn close_buffer(&mut self, depth: usize) -> Chat {
        while self.components.len() > depth {
            if let Some(inner) = self.components.pop() {
                self.append(inner);
            }
        }

        if depth > 0 && self.components.len() == depth {
            self.pop_component().unwrap_or_default()
        } else {
            Chat::new()
        }
    }

    pub fn push_center_tag(&mut self, marker: usize) {
        self.centers.push(marker);
    }

    pub fn pop_center_tag(&mut self) -> Option<usize> {
        self.centers.pop()
    }

    pub fn peek_center_tag(&self) -> Option<usize> {
        self.centers.last().copied()
    }

    pub fn has_active_center_tag(&self) -> bool {
        !self.centers.is_empty()
    }

    pub fn into_root(mut self) -> Chat {
        // anything still buffered belongs to the output
        self.close_buffer(0);
        self.root
    }
}
