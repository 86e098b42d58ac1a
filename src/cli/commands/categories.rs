use crate::config::Config;
use crate::errors::AppResult;
use crate::models::category::is_pseudo_category;
use crate::ui::messages::header;
use crate::utils::colors::{GREY, RESET};
use crate::utils::theme::accent_color;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let accent = accent_color(&cfg.color_theme);

    header("Categories", accent);
    for c in &cfg.categories {
        if is_pseudo_category(c) {
            println!("  {c} {GREY}(filter){RESET}");
        } else {
            println!("  {c}");
        }
    }

    header("Icons", accent);
    for i in &cfg.images {
        println!("  {i}");
    }

    Ok(())
}
