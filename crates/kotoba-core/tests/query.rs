use jiff::Timestamp;

use kotoba_core::error::CoreError;
use kotoba_core::models::category::WordCategory;
use kotoba_core::models::image::ImageItem;
use kotoba_core::models::link::LinkItem;
use kotoba_core::models::word::Word;
use kotoba_core::query::{
    ArchiveFilter, LinkFilter, ProcessedFilter, SortBy, SortOrder, WordFilter, WordKind, WordSort,
    filter_images, filter_links, filter_words, parse_category_filter,
};

fn at(secs: i64) -> Timestamp {
    Timestamp::from_second(secs).unwrap()
}

fn word(id: &str, japanese: &str, chinese: &str, rating: u8, secs: i64, is_phrase: bool) -> Word {
    Word {
        id: id.to_string(),
        japanese: japanese.to_string(),
        chinese: chinese.to_string(),
        category: WordCategory::Other,
        rating,
        created_at: at(secs),
        is_phrase,
    }
}

fn sample() -> Vec<Word> {
    vec![
        word("a", "みず", "水", 3, 100, false),
        word("b", "コーヒーをください", "请给我咖啡", 5, 300, true),
        word("c", "パン", "面包", 3, 200, false),
        word("d", "ホテル", "酒店", 1, 200, false),
    ]
}

fn ids(words: &[Word]) -> Vec<&str> {
    words.iter().map(|w| w.id.as_str()).collect()
}

#[test]
fn default_is_newest_first() {
    let out = filter_words(&sample(), &WordFilter::default(), WordSort::default());
    assert_eq!(ids(&out), ["b", "c", "d", "a"]);
}

#[test]
fn created_at_ascending_is_monotonic_and_stable() {
    let sort = WordSort { by: SortBy::CreatedAt, order: SortOrder::Asc };
    let out = filter_words(&sample(), &WordFilter::default(), sort);
    assert_eq!(ids(&out), ["a", "c", "d", "b"]);
    assert!(out.windows(2).all(|w| w[0].created_at <= w[1].created_at));
}

#[test]
fn rating_descending_keeps_ties_in_stored_order() {
    let sort = WordSort { by: SortBy::Rating, order: SortOrder::Desc };
    let out = filter_words(&sample(), &WordFilter::default(), sort);
    assert_eq!(ids(&out), ["b", "a", "c", "d"]);
}

#[test]
fn search_matches_either_side() {
    let filter = WordFilter { search: "咖啡".into(), ..Default::default() };
    assert_eq!(ids(&filter_words(&sample(), &filter, WordSort::default())), ["b"]);

    let filter = WordFilter { search: "パ".into(), ..Default::default() };
    assert_eq!(ids(&filter_words(&sample(), &filter, WordSort::default())), ["c"]);
}

#[test]
fn kind_and_rating_filters_combine() {
    let filter = WordFilter {
        kind: WordKind::Word,
        ratings: vec![3],
        ..Default::default()
    };
    let sort = WordSort { by: SortBy::CreatedAt, order: SortOrder::Asc };
    assert_eq!(ids(&filter_words(&sample(), &filter, sort)), ["a", "c"]);

    let phrases = WordFilter { kind: WordKind::Phrase, ..Default::default() };
    assert_eq!(ids(&filter_words(&sample(), &phrases, sort)), ["b"]);
}

#[test]
fn category_filter() {
    let mut words = sample();
    words[2].category = WordCategory::Food;
    let filter = WordFilter { category: Some(WordCategory::Food), ..Default::default() };
    assert_eq!(ids(&filter_words(&words, &filter, WordSort::default())), ["c"]);
}

#[test]
fn category_selector_parsing() {
    assert_eq!(parse_category_filter("all").unwrap(), None);
    assert_eq!(parse_category_filter("").unwrap(), None);
    assert_eq!(parse_category_filter(" food ").unwrap(), Some(WordCategory::Food));
    assert!(matches!(
        parse_category_filter("snacks"),
        Err(CoreError::UnknownCategory(name)) if name == "snacks"
    ));
}

#[test]
fn image_archive_filter() {
    let image = |id: &str, secs: i64, archived: bool| ImageItem {
        id: id.to_string(),
        url: "data:image/png;base64,AAAA".to_string(),
        name: format!("{id}.png"),
        created_at: at(secs),
        is_archived: archived,
        extracted_words: None,
    };
    let images = vec![image("x", 1, true), image("y", 2, false), image("z", 3, true)];

    let out = filter_images(&images, ArchiveFilter::Archived, SortOrder::Desc);
    assert_eq!(out.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(), ["z", "x"]);

    let out = filter_images(&images, ArchiveFilter::Unarchived, SortOrder::Asc);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "y");
}

#[test]
fn link_filter_by_processed_and_category() {
    let link = |id: &str, secs: i64, processed: bool, category| LinkItem {
        id: id.to_string(),
        url: format!("https://example.com/{id}"),
        title: id.to_string(),
        category,
        is_processed: processed,
        created_at: at(secs),
    };
    let links = vec![
        link("1", 10, false, WordCategory::Food),
        link("2", 20, true, WordCategory::Food),
        link("3", 30, false, WordCategory::Transport),
    ];

    let filter = LinkFilter {
        processed: ProcessedFilter::Unprocessed,
        category: None,
    };
    let out = filter_links(&links, filter, SortOrder::Asc);
    assert_eq!(out.iter().map(|l| l.id.as_str()).collect::<Vec<_>>(), ["1", "3"]);

    let filter = LinkFilter {
        processed: ProcessedFilter::All,
        category: Some(WordCategory::Food),
    };
    let out = filter_links(&links, filter, SortOrder::Desc);
    assert_eq!(out.iter().map(|l| l.id.as_str()).collect::<Vec<_>>(), ["2", "1"]);
}
