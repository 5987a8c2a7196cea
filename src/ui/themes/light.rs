use crate::rendering::svg::LIGHT_FILL;
use crate::ui::themes::CatalogTheme;

pub struct LightTheme;

impl CatalogTheme for LightTheme {
    fn background(&self) -> &'static str {
        "#F7F6F6"
    }

    fn card(&self) -> &'static str {
        "#FFFFFF"
    }

    fn text(&self) -> &'static str {
        "#121212"
    }

    fn preview_fill(&self) -> &'static str {
        LIGHT_FILL
    }
}
