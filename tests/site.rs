//! End-to-end: CSV export on disk → generated site on disk.
//!
//! Uses the stock column mapping, so the fixture headers are the scraper
//! class names the tool ships configured for.

use menu_site::config::SiteConfig;
use menu_site::{generate, scan};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HEADER: &str = "qBF1Pd,hfpxzc href,MW4etd,UY7F9,W4Efsd,W4Efsd (3),W4Efsd (4),W4Efsd (5),\
FQ2IWe src,ah5Ghc,ah5Ghc (2),ah5Ghc (3),J8zHNe,A1zNzb href,AJB7ye (2),J8zHNe (2),A1zNzb href (2)";

fn fixture_csv() -> String {
    [
        "\u{feff}".to_string() + HEADER,
        "A,https://maps.example/a,4.5,(128),咖啡廳,台北市 1 號,營業中,08:00–18:00,\
         https://img.example/a.jpg,內用,外帶,,訂位,https://book.example/a,$200-400,菜單,https://menu.example/a"
            .to_string(),
        "A,,,,O'Neil's Diner,,,,,,,,,,,,".to_string(),
        "\"評分\n<b>Bold</b> & Co\",,3.9,(7),,,,,,,,,,,,,".to_string(),
    ]
    .join("\n")
        + "\n"
}

fn build_site(csv_path: &Path, out: &Path) -> usize {
    let config = SiteConfig::default();
    let manifest = scan::scan(csv_path, &config.columns, config.strict_columns).unwrap();
    generate::generate(&manifest.restaurants, out).unwrap();
    manifest.restaurants.len()
}

fn setup() -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let csv_path = tmp.path().join("restaurants.csv");
    fs::write(&csv_path, fixture_csv()).unwrap();
    let out = tmp.path().join("docs");
    (tmp, csv_path, out)
}

#[test]
fn duplicate_names_get_separate_pages() {
    let (_tmp, csv_path, out) = setup();
    assert_eq!(build_site(&csv_path, &out), 3);

    let index = fs::read_to_string(out.join("index.html")).unwrap();
    assert_eq!(index.matches(r#"<article class="card">"#).count(), 3);
    assert_eq!(index.matches(r#"href="restaurants/a/""#).count(), 1);
    assert_eq!(index.matches(r#"href="restaurants/a-2/""#).count(), 1);
    assert!(index.contains("共有 3 間餐廳"));
    assert!(index.contains(r#"href="assets/style.css""#));

    for slug in ["a", "a-2", "bboldb--co"] {
        let page = out.join("restaurants").join(slug).join("index.html");
        let html = fs::read_to_string(&page).unwrap();
        assert!(!html.is_empty(), "{slug} detail page is empty");
        assert!(html.contains(r#"href="../../assets/style.css""#));
    }
}

#[test]
fn detail_page_carries_record_fields() {
    let (_tmp, csv_path, out) = setup();
    build_site(&csv_path, &out);

    let html = fs::read_to_string(out.join("restaurants/a/index.html")).unwrap();
    assert!(html.contains("<title>A</title>"));
    assert!(html.contains("(128)"));
    assert!(html.contains("https://book.example/a"));
    assert!(html.contains("https://menu.example/a"));
    assert!(html.contains("內用"));

    let sparse = fs::read_to_string(out.join("restaurants/a-2/index.html")).unwrap();
    assert!(sparse.contains("沒有可用的外部連結"));
    assert!(sparse.contains("尚未提供服務資訊"));
}

#[test]
fn markup_in_data_is_escaped() {
    let (_tmp, csv_path, out) = setup();
    build_site(&csv_path, &out);

    let index = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(!index.contains("<b>Bold</b>"));
    assert!(index.contains("&lt;b&gt;Bold&lt;/b&gt; &amp; Co"));

    let html = fs::read_to_string(out.join("restaurants/bboldb--co/index.html")).unwrap();
    assert!(!html.contains("<b>Bold</b>"));
    assert!(html.contains("<title>&lt;b&gt;Bold&lt;/b&gt; &amp; Co</title>"));

    let sparse = fs::read_to_string(out.join("restaurants/a-2/index.html")).unwrap();
    assert!(!sparse.contains("O'Neil's"));
    assert!(sparse.contains("O&#x27;Neil&#x27;s Diner"));
}

#[test]
fn rerun_is_identical_and_keeps_stylesheet() {
    let (_tmp, csv_path, out) = setup();
    build_site(&csv_path, &out);

    let index_first = fs::read(out.join("index.html")).unwrap();
    let detail_first = fs::read(out.join("restaurants/a-2/index.html")).unwrap();
    let css_first = fs::read(out.join("assets/style.css")).unwrap();
    assert!(!css_first.is_empty());

    // A hand edit must survive regeneration
    let mut edited = css_first.clone();
    edited.extend_from_slice(b"\n.card { border: 0; }\n");
    fs::write(out.join("assets/style.css"), &edited).unwrap();

    build_site(&csv_path, &out);

    assert_eq!(fs::read(out.join("index.html")).unwrap(), index_first);
    assert_eq!(
        fs::read(out.join("restaurants/a-2/index.html")).unwrap(),
        detail_first
    );
    assert_eq!(fs::read(out.join("assets/style.css")).unwrap(), edited);
}

#[test]
fn missing_input_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let config = SiteConfig::default();
    let missing = tmp.path().join("restaurant_119HW.csv");

    let err = scan::scan(&missing, &config.columns, false).unwrap_err();
    assert!(err.to_string().contains("restaurant_119HW.csv"));
    assert!(!tmp.path().join("docs").exists());
}
