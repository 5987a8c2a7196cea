use crate::rendering::svg::DARK_FILL;
use crate::ui::themes::CatalogTheme;

pub struct DarkTheme;

impl CatalogTheme for DarkTheme {
    fn background(&self) -> &'static str {
        "#181818"
    }

    fn card(&self) -> &'static str {
        "#2C2C2E"
    }

    fn text(&self) -> &'static str {
        "#FEFEFE"
    }

    fn preview_fill(&self) -> &'static str {
        DARK_FILL
    }
}
