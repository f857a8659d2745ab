//! Plain-text dumps of a form for snapshot assertions.

use std::fmt::Write;

use crate::form::Form;
use crate::widget::{Widget, WidgetKind};

/// Render a form as an indented outline, one widget per line.
///
/// The first line is the window (`Form "title" WxH`); every widget follows
/// in depth-first order, indented two spaces per nesting level, with its
/// resolved font in brackets when it has one.
///
/// ```text
/// Form "Login" 300x400
///   Label lbl_login @ (100, 20) "Login" [Arial 18 bold roman no_underline]
/// ```
pub fn form_to_string(form: &Form) -> String {
    let mut out = format!("Form \"{}\" {}", form.title(), form.size());
    let tree = form.widgets();
    let mut stack: Vec<(usize, _)> = tree
        .children(tree.root())
        .iter()
        .rev()
        .map(|&id| (1, id))
        .collect();
    while let Some((depth, id)) = stack.pop() {
        let Some(widget) = tree.get(id) else { continue };
        let _ = write!(out, "\n{:indent$}{}", "", describe(widget), indent = depth * 2);
        stack.extend(tree.children(id).iter().rev().map(|&child| (depth + 1, child)));
    }
    out
}

/// One-line description of a widget, without indentation.
pub fn describe(widget: &Widget) -> String {
    let mut line = format!("{} {} @ ({}, {})", widget.widget_type(), widget.name(), widget.x(), widget.y());
    let _ = match widget.kind() {
        WidgetKind::Frame(frame) => write!(line, " {}", frame.size()),
        WidgetKind::Label(label) => write!(line, " {:?}", label.text()),
        WidgetKind::Button(button) => write!(line, " {:?}", button.text()),
        WidgetKind::TextEntry(entry) => write!(line, " width={} {:?}", entry.width(), entry.display_text()),
        WidgetKind::Dropdown(dropdown) => {
            write!(line, " [{}] selected={:?}", dropdown.values().join("|"), dropdown.selected())
        }
        WidgetKind::Spinner(spinner) => write!(
            line,
            " {}..={} step {} value={}",
            spinner.from(),
            spinner.to(),
            spinner.increment(),
            spinner.value()
        ),
        WidgetKind::DatePicker(picker) => write!(line, " {}", picker.date_text()),
    };
    if let Some(font) = widget.font() {
        let _ = write!(line, " [{font}]");
    }
    line
}
