use serde::Serialize;

/// Entry shown in the host's block toolbox.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Toolbox {
    pub title: &'static str,
    pub icon: &'static str,
}

pub const TOOLBOX: Toolbox = Toolbox {
    title: "Image",
    icon: r#"<svg width="24" height="24" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><rect x="4" y="5" width="16" height="14" rx="3" fill="none" stroke="currentColor" stroke-width="2"/><path d="M4 15l4-4 4 4 3-3 5 5" fill="none" stroke="currentColor" stroke-width="2" stroke-linejoin="round"/></svg>"#,
};
