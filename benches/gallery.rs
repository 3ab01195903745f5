use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scraper::Html;

use genshin_stickers::config::options::ScrapeOptions;
use genshin_stickers::specs::gallery;

/// Synthetic gallery page shaped like the wiki's: a heading per set,
/// followed by a block of captioned images.
fn sample_page(sets: u32, per_set: u32) -> String {
    let mut page = String::from("<html><body>");
    for s in 1..=sets {
        page.push_str(&format!(
            r#"<h3><span class="mw-headline" id="Set_{s}">Set {s} <img data-src="https://static.example/{s}/p.png/revision/latest/scale-to-width-down/40" data-image-key="Icon_Emoji_Paimon%27s_Paintings_{s}_Preview.png"></span></h3><div class="wikia-gallery">"#
        ));
        for i in 0..per_set {
            page.push_str(&format!(
                r#"<div class="wikia-gallery-item"><a href="/wiki/File:x"><img src="data:image/gif;base64,R0lGODlhAQABAIABAAAAAP" data-src="https://static.example/{s}/{i}.png/revision/latest/scale-to-width-down/120?cb=2024" data-image-key="Icon_Emoji_Paimon%27s_Paintings_{s}_Emote_{i}.png" data-caption="Emote {i}"></a></div>"#
            ));
        }
        page.push_str("</div>");
    }
    page.push_str("</body></html>");
    page
}

fn bench_gallery(c: &mut Criterion) {
    let page = sample_page(30, 16);
    let doc = Html::parse_document(&page);
    let opts = ScrapeOptions::default();

    c.bench_function("gallery_parse_document", |b| {
        b.iter(|| Html::parse_document(black_box(&page)))
    });

    c.bench_function("gallery_collect_sets", |b| {
        b.iter(|| {
            let sets = gallery::parse(black_box(&doc), &opts).expect("synthetic page parses");
            black_box(sets.len())
        })
    });
}

criterion_group!(benches, bench_gallery);
criterion_main!(benches);
