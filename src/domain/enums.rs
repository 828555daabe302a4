/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    /// Entering the week's outcome totals before archiving
    ArchiveForm,
}

/// Main pane currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Week,
    History,
}

impl View {
    pub fn toggled(&self) -> Self {
        match self {
            View::Week => View::History,
            View::History => View::Week,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            View::Week => "This Week",
            View::History => "Archive",
        }
    }
}
