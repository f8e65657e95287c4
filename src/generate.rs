//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Takes the restaurants built by the scan
//! stage and writes the final static site.
//!
//! ## Generated Pages
//!
//! - **Index page** (`/index.html`): restaurant count and a grid of cards
//! - **Detail pages** (`/restaurants/{slug}/index.html`): full record,
//!   promotional highlights, services and outbound links
//! - **Stylesheet** (`/assets/style.css`): written once, never overwritten,
//!   so a hand-edited stylesheet survives later runs
//!
//! ## Output Structure
//!
//! ```text
//! docs/
//! ├── index.html
//! ├── assets/
//! │   └── style.css
//! └── restaurants/
//!     ├── noodle-house/
//!     │   └── index.html
//!     └── noodle-house-2/
//!         └── index.html
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Record text is spliced through `Text`, which escapes `& < > " '`, so it
//! is never trusted as markup. The renderers are pure: they take a record and return
//! [`Markup`], and the filesystem is touched only by [`generate`].
//!
//! Pages link the stylesheet relatively (`../` repeated `depth` times), so the
//! output works from any subdirectory of a file server or straight from disk.

use crate::types::Restaurant;
use maud::{DOCTYPE, Escaper, Markup, Render, html};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS: &str = include_str!("../static/style.css");

const CONTACT_EMAIL: &str = "hello@example.com";

/// Depth of a detail page below the output root (`restaurants/<slug>/`).
pub const DETAIL_DEPTH: usize = 2;

/// What [`generate`] wrote, for CLI reporting.
#[derive(Debug)]
pub struct GenerateReport {
    pub index: PathBuf,
    /// `(name, path)` for every detail page, in input order
    pub pages: Vec<(String, PathBuf)>,
    pub stylesheet: PathBuf,
    /// False when an existing stylesheet was left untouched
    pub stylesheet_written: bool,
}

/// Write the full site for `restaurants` under `output_dir`.
///
/// Slugs must be unique; [`crate::scan`] guarantees it, and two records with
/// the same slug would write the same detail file.
pub fn generate(
    restaurants: &[Restaurant],
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let assets_dir = output_dir.join("assets");
    let restaurants_dir = output_dir.join("restaurants");
    fs::create_dir_all(&assets_dir)?;
    fs::create_dir_all(&restaurants_dir)?;

    let index = output_dir.join("index.html");
    let index_html = render_shell(render_index(restaurants), "餐廳列表", 0);
    fs::write(&index, index_html.into_string())?;
    tracing::debug!(path = %index.display(), "wrote index page");

    let mut pages = Vec::with_capacity(restaurants.len());
    for restaurant in restaurants {
        let page_dir = restaurants_dir.join(&restaurant.slug);
        fs::create_dir_all(&page_dir)?;
        let page = page_dir.join("index.html");
        let html = render_shell(render_detail(restaurant), &restaurant.name, DETAIL_DEPTH);
        fs::write(&page, html.into_string())?;
        tracing::debug!(path = %page.display(), "wrote detail page");
        pages.push((restaurant.name.clone(), page));
    }

    let stylesheet = assets_dir.join("style.css");
    let stylesheet_written = write_stylesheet(&stylesheet)?;

    Ok(GenerateReport {
        index,
        pages,
        stylesheet,
        stylesheet_written,
    })
}

/// Write the stock stylesheet unless one already exists.
fn write_stylesheet(path: &Path) -> std::io::Result<bool> {
    if path.exists() {
        tracing::debug!(path = %path.display(), "stylesheet exists, leaving it untouched");
        return Ok(false);
    }
    fs::write(path, CSS)?;
    Ok(true)
}

/// Record text for interpolation into markup or attribute values.
///
/// Escapes `& < > "` like any maud splice, and also writes `'` as `&#x27;`
/// so no character from the data is emitted as markup syntax.
struct Text<'a>(&'a str);

impl Render for Text<'_> {
    fn render_to(&self, buffer: &mut String) {
        for (i, part) in self.0.split('\'').enumerate() {
            if i > 0 {
                buffer.push_str("&#x27;");
            }
            // Writing into a String cannot fail
            let _ = Escaper::new(buffer).write_str(part);
        }
    }
}

// ============================================================================
// HTML Components
// ============================================================================

/// Wraps a page body in the shared document skeleton.
///
/// `depth` is how many directories below the output root the page lives:
/// 0 for `index.html`, [`DETAIL_DEPTH`] for detail pages.
pub fn render_shell(body: Markup, title: &str, depth: usize) -> Markup {
    let stylesheet = format!("{}assets/style.css", "../".repeat(depth));
    html! {
        (DOCTYPE)
        html lang="zh-Hant" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (Text(title)) }
                link rel="stylesheet" href=(stylesheet);
            }
            body {
                div.page { (body) }
            }
        }
    }
}

/// Index-page summary card linking to the restaurant's detail page.
pub fn render_card(r: &Restaurant) -> Markup {
    html! {
        article.card {
            a.card-link href=(Text(&r.detail_path())) {
                @if r.image_url.is_empty() {
                    div.card-image.placeholder { "沒有圖片" }
                } @else {
                    div.card-image {
                        img src=(Text(&r.image_url)) alt=(Text(&r.name));
                    }
                }
                div.card-body {
                    h2 { (Text(&r.name)) }
                    p.meta {
                        @if !r.rating.is_empty() {
                            div.rating {
                                "⭐ " (Text(&r.rating)) " "
                                span.reviews { "(" (Text(&r.review_count)) ")" }
                            }
                        }
                        span.category { (Text(&r.category)) }
                        @if !r.price.is_empty() {
                            span.price { (Text(&r.price)) }
                        }
                    }
                    p.status { (Text(&r.status)) " " (Text(&r.hours)) }
                    p.address { (Text(&r.address)) }
                }
            }
        }
    }
}

/// Index page body: header with the restaurant count and the card grid.
pub fn render_index(restaurants: &[Restaurant]) -> Markup {
    html! {
        header.hero-header {
            h1 { "餐廳清單" }
            p { "共有 " (restaurants.len()) " 間餐廳，每一間都有自己的獨立頁面。" }
        }
        section.grid {
            @for restaurant in restaurants {
                (render_card(restaurant))
            }
        }
    }
}

/// Full detail page body for one restaurant.
pub fn render_detail(r: &Restaurant) -> Markup {
    html! {
        main.detail {
            a.back-link href="../../index.html" { "← 回到餐廳列表" }
            header {
                h1 { (Text(&r.name)) }
                div.tags {
                    span.pill { (Text(&r.category)) }
                    @if !r.price.is_empty() {
                        span.pill { (Text(&r.price)) }
                    }
                }
                div.summary {
                    div.rating {
                        "⭐ " (Text(&r.rating)) " "
                        span.reviews { "(" (Text(&r.review_count)) ")" }
                    }
                    div.status { (Text(&r.status)) " " (Text(&r.hours)) }
                    div.address { (Text(&r.address)) }
                }
            }
            @if r.image_url.is_empty() {
                div.hero.placeholder { "沒有提供圖片" }
            } @else {
                img.hero src=(Text(&r.image_url)) alt=(Text(&r.name));
            }
            (render_promo(r))
            section {
                h2 { "服務" }
                @if r.services.is_empty() {
                    p.muted { "尚未提供服務資訊" }
                } @else {
                    ul.services {
                        @for service in &r.services {
                            li { span.bullet { "•" } " " (Text(service)) }
                        }
                    }
                }
            }
            section {
                h2 { "連結" }
                div.actions { (render_actions(r)) }
            }
        }
    }
}

/// Growth-proposal section: highlights, consultation links and stat panels.
fn render_promo(r: &Restaurant) -> Markup {
    let location = if r.map_url.is_empty() {
        "../../index.html"
    } else {
        r.map_url.as_str()
    };
    let services = r.services.join("、");

    html! {
        section.promo {
            div.promo-card {
                div.promo-text {
                    p.eyebrow { "合作提案" }
                    h2 { "為 " (Text(&r.name)) " 打造的營運成長方案" }
                    p.muted {
                        "把門市資訊轉換成吸引人的故事：用評論、服務型態與價格帶，"
                        "為你量身設計廣告素材、回訪訊息與會員培育流程。"
                    }
                    ul.promo-list { (render_highlights(r)) }
                    div.promo-actions {
                        a.button.primary href={ "mailto:" (CONTACT_EMAIL) "?subject=" (Text(&r.name)) "%20合作諮詢" } {
                            "預約 30 分鐘諮詢"
                        }
                        a.button.secondary href=(Text(location)) target="_blank" rel="noopener" {
                            "查看門市定位"
                        }
                    }
                }
                div.promo-panel {
                    (render_stat("招牌亮點", or(&r.category, "人氣餐廳"),
                        "我們會根據熱門品項與客群關鍵字，產出投放文案與著陸頁 A/B 測試。"))
                    (render_stat("口碑力", or(&r.review_count, "新開店"),
                        "將評論轉成社群推薦語，並建立「到店後」滿意度追蹤流程。"))
                    (render_stat("營運服務", or(&services, "彈性體驗"),
                        "針對營業時段與服務模式自動提醒，減少空檔、放大尖峰營收。"))
                }
            }
        }
    }
}

/// Up to four highlights driven by which fields are present; never empty.
fn render_highlights(r: &Restaurant) -> Markup {
    let has_any = !r.rating.is_empty()
        || !r.category.is_empty()
        || !r.services.is_empty()
        || !r.price.is_empty();
    let first_services = r
        .services
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("、");

    html! {
        @if !r.rating.is_empty() {
            li {
                strong { (Text(&r.rating)) " ★" }
                " · " (Text(or(&r.review_count, "近期評論"))) " 則真實口碑，適合放大曝光。"
            }
        }
        @if !r.category.is_empty() {
            li { "依照「" (Text(&r.category)) "」標籤，鎖定對味客群，減少無效廣告浪費。" }
        }
        @if !r.services.is_empty() {
            li { "用「" (Text(&first_services)) "」等服務情境，客製化導購腳本，提升轉單率。" }
        }
        @if !r.price.is_empty() {
            li { "以客單 " (Text(&r.price)) " 為目標，推薦適合的再行銷與回訪提醒節奏。" }
        }
        @if !has_any {
            li { "專人協助設定行銷流程，快速上線導流與留客工具。" }
        }
    }
}

fn render_stat(label: &str, value: &str, note: &str) -> Markup {
    html! {
        div.stat {
            div.stat-label { (label) }
            div.stat-value { (Text(value)) }
            p.stat-note { (note) }
        }
    }
}

/// Outbound call-to-action links, or a placeholder when there are none.
fn render_actions(r: &Restaurant) -> Markup {
    let has_any = r.action().is_some() || !r.map_url.is_empty() || !r.secondary_links.is_empty();

    html! {
        @if let Some((label, url)) = r.action() {
            a.button.primary href=(Text(url)) target="_blank" rel="noopener" { (Text(label)) }
        }
        @if !r.map_url.is_empty() {
            a.button.secondary href=(Text(&r.map_url)) target="_blank" rel="noopener" { "查看地圖" }
        }
        @for link in &r.secondary_links {
            a.button.secondary href=(Text(&link.url)) target="_blank" rel="noopener" { (Text(&link.label)) }
        }
        @if !has_any {
            p.muted { "沒有可用的外部連結" }
        }
    }
}

fn or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

// ============================================================================
// Tests
// ============================================================================
