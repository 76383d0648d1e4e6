// Certificate PDF generation, hand-assembled (no document library).
// The layout is a fixed 1080x1080 single page; everything variable comes
// in through `CertificateText`.

pub mod content;
pub mod document;

use content::ContentStream;

pub const PAGE_WIDTH: u32 = 1080;
pub const PAGE_HEIGHT: u32 = 1080;

const BACKGROUND: &str = "#FFF8F0";
const INK: &str = "#2B2B2B";
const MUTED: &str = "#8A8A8A";
const BRAND_PINK: &str = "#FF7BA9";

/// The variable strings stamped onto the fixed layout.
pub struct CertificateText<'a> {
    pub period_start: &'a str,
    pub period_end: &'a str,
    pub issued_on: &'a str,
    pub serial: &'a str,
}

pub fn generate_certificate(text: &CertificateText<'_>) -> Vec<u8> {
    let mut cs = ContentStream::new();
    cs.fill_rect(f64::from(PAGE_WIDTH), f64::from(PAGE_HEIGHT), BACKGROUND);

    cs.show_text("수료증", 450.0, 760.0, 72.0, INK);
    cs.show_text(
        "위 학생은 아래 기간 동안 진행된 전 과정을",
        280.0,
        600.0,
        30.0,
        INK,
    );
    cs.show_text(
        "성실히 수료하였기에 이 증서를 드립니다.",
        300.0,
        550.0,
        30.0,
        INK,
    );
    cs.show_text(
        &format!("{} ~ {}", text.period_start, text.period_end),
        390.0,
        450.0,
        28.0,
        INK,
    );
    cs.show_text(&format!("발급일: {}", text.issued_on), 420.0, 320.0, 24.0, INK);
    cs.show_text(&format!("증서 번호: {}", text.serial), 370.0, 270.0, 18.0, MUTED);
    cs.show_text("CANDY CLASS", 430.0, 140.0, 32.0, BRAND_PINK);

    document::assemble(&cs.into_bytes(), PAGE_WIDTH, PAGE_HEIGHT)
}
