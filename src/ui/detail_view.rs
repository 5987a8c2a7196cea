//! Single family page with the pangram/alphabet visualizer

use crate::core::errors::CatalogError;
use crate::data::{FamilyDetailsResponse, FontFamilyDetails, FontFamilyImage};
use crate::provider::FamilyProvider;
use crate::ui::view_state::{NavigationTicket, NavigationTracker, ViewState};
use tracing::debug;

/// Which preview the visualizer shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    #[default]
    Pangram,
    Alphabet,
}

impl PreviewMode {
    pub const ALL: [PreviewMode; 2] = [PreviewMode::Pangram, PreviewMode::Alphabet];

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pangram" => Some(Self::Pangram),
            "alphabet" => Some(Self::Alphabet),
            _ => None,
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pangram => "Pangram",
            Self::Alphabet => "Alphabet",
        }
    }

    /// Stable id fragment used in markup
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Pangram => "pangram",
            Self::Alphabet => "alphabet",
        }
    }

    pub fn image<'a>(&self, family: &'a FontFamilyDetails) -> &'a FontFamilyImage {
        match self {
            Self::Pangram => &family.images.pangram,
            Self::Alphabet => &family.images.alphabet,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DetailView {
    id_family: String,
    state: ViewState<FontFamilyDetails>,
    preview: PreviewMode,
    navigation: NavigationTracker,
}

impl DetailView {
    pub fn new(id_family: impl Into<String>) -> Self {
        Self {
            id_family: id_family.into(),
            state: ViewState::Idle,
            preview: PreviewMode::default(),
            navigation: NavigationTracker::default(),
        }
    }

    pub fn id_family(&self) -> &str {
        &self.id_family
    }

    pub fn state(&self) -> &ViewState<FontFamilyDetails> {
        &self.state
    }

    pub fn preview(&self) -> PreviewMode {
        self.preview
    }

    pub fn begin_load(&mut self) -> NavigationTicket {
        self.state = ViewState::Loading;
        self.preview = PreviewMode::default();
        self.navigation.begin()
    }

    /// Apply a detail response; stale tickets are ignored
    pub fn finish(
        &mut self,
        ticket: NavigationTicket,
        result: Result<FamilyDetailsResponse, CatalogError>,
    ) -> bool {
        if !self.navigation.is_current(ticket) {
            debug!("Discarding stale detail response for {}", self.id_family);
            return false;
        }
        self.state = ViewState::from_result(result.map(|response| response.family));
        true
    }

    pub async fn load(&mut self, provider: &dyn FamilyProvider) -> &ViewState<FontFamilyDetails> {
        let ticket = self.begin_load();
        let result = provider.family_details(&self.id_family).await;
        self.finish(ticket, result);
        &self.state
    }

    /// Switch the visualizer. Only a loaded view has a visualizer; returns
    /// whether the mode changed.
    pub fn select_preview(&mut self, mode: PreviewMode) -> bool {
        if self.state.loaded().is_none() || self.preview == mode {
            return false;
        }
        self.preview = mode;
        true
    }

    /// Image the visualizer currently shows
    pub fn displayed_image(&self) -> Option<&FontFamilyImage> {
        self.state.loaded().map(|family| self.preview.image(family))
    }

    /// `<foundry> - <family>` once loaded
    pub fn title(&self) -> Option<String> {
        self.state
            .loaded()
            .map(|family| format!("{} - {}", family.foundry.name, family.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::CountingProvider;

    #[tokio::test]
    async fn test_defaults_to_pangram_and_toggles_without_refetch() {
        let provider = CountingProvider::fixtures();
        let mut view = DetailView::new("fam-1002");
        view.load(&provider).await;
        let family = view.state().loaded().unwrap().clone();

        assert_eq!(view.preview(), PreviewMode::Pangram);
        assert_eq!(view.displayed_image(), Some(&family.images.pangram));

        assert!(view.select_preview(PreviewMode::Alphabet));
        assert_eq!(view.displayed_image(), Some(&family.images.alphabet));
        assert!(!view.select_preview(PreviewMode::Alphabet));

        assert_eq!(provider.detail_calls(), 1);
    }

    #[tokio::test]
    async fn test_title_uses_foundry_and_family() {
        let mut view = DetailView::new("fam-1001");
        view.load(&CountingProvider::fixtures()).await;
        assert_eq!(view.title().as_deref(), Some("Atelier Nord - Aperture"));
    }

    #[tokio::test]
    async fn test_unknown_family_is_no_data() {
        let mut view = DetailView::new("missing");
        view.load(&CountingProvider::fixtures()).await;

        assert_eq!(view.state(), &ViewState::NoData);
        assert_eq!(view.title(), None);
        assert!(!view.select_preview(PreviewMode::Alphabet));
    }

    #[tokio::test]
    async fn test_failure_keeps_message() {
        let provider = CountingProvider::failing(CatalogError::Network("connection refused".into()));
        let mut view = DetailView::new("fam-1001");
        view.load(&provider).await;

        assert_eq!(
            view.state(),
            &ViewState::Failed("Network error: connection refused".into())
        );
    }

    #[test]
    fn test_preview_mode_parse() {
        assert_eq!(PreviewMode::parse("Alphabet"), Some(PreviewMode::Alphabet));
        assert_eq!(PreviewMode::parse("pangram"), Some(PreviewMode::Pangram));
        assert_eq!(PreviewMode::parse("glyphs"), None);
    }
}
