use common::model::field::{FieldChanges, FieldKind};

/// Tabs of the right-hand pane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Editor,
    Preview,
}

#[derive(Clone)]
pub enum Msg {
    SetTab(Tab),
    SetTitle(String),
    AddField(FieldKind),
    UpdateField(String, FieldChanges),
    RemoveField(String),
    MoveField(usize, usize),
    AddOption(String),
    UpdateOption(String, usize, String),
    RemoveOption(String, usize),
}
