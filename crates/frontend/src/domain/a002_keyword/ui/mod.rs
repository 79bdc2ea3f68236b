mod panel;

pub use panel::KeywordsPanel;
