use scraper::{ElementRef, Html, Selector};

use crate::error::scrape::ScrapeError;
use crate::model::course_record::CourseRecord;
use crate::model::extraction_report::{ExtractionReport, SkipReason, SkippedCard};

/// Compiled selectors for one listing layout.
#[derive(Debug, Clone)]
pub struct CardSelectors {
    card: Selector,
    title: Selector,
    link: Selector,
}

impl CardSelectors {
    pub fn new(card: &str, title: &str, link: &str) -> Result<Self, ScrapeError> {
        Ok(CardSelectors {
            card: compile(card)?,
            title: compile(title)?,
            link: compile(link)?,
        })
    }
}

fn compile(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|err| ScrapeError::InvalidSelector {
        selector: selector.to_string(),
        message: err.to_string(),
    })
}

/// Walks every card in document order. Incomplete cards are reported, never fatal.
pub fn extract_courses(html: &str, selectors: &CardSelectors, origin: &str) -> ExtractionReport {
    let document = Html::parse_document(html);
    let mut report = ExtractionReport::default();

    for (position, card) in document.select(&selectors.card).enumerate() {
        match read_card(card, selectors, origin) {
            Ok(record) => report.records.push(record),
            Err(reason) => report.skipped.push(SkippedCard { position, reason }),
        }
    }

    report
}

fn read_card(
    card: ElementRef<'_>,
    selectors: &CardSelectors,
    origin: &str,
) -> Result<CourseRecord, SkipReason> {
    let title_node = card
        .select(&selectors.title)
        .next()
        .ok_or(SkipReason::MissingTitle)?;
    let href = card
        .select(&selectors.link)
        .next()
        .and_then(|anchor| anchor.value().attr("href"))
        .ok_or(SkipReason::MissingLink)?;

    let title = title_node.text().collect::<String>().trim().to_string();
    if title.is_empty() {
        return Err(SkipReason::BlankTitle);
    }

    Ok(CourseRecord {
        title,
        link: format!("{}{}", origin, href),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::{
        DEFAULT_CARD_SELECTOR, DEFAULT_LINK_SELECTOR, DEFAULT_ORIGIN, DEFAULT_TITLE_SELECTOR,
    };

    fn default_selectors() -> CardSelectors {
        CardSelectors::new(
            DEFAULT_CARD_SELECTOR,
            DEFAULT_TITLE_SELECTOR,
            DEFAULT_LINK_SELECTOR,
        )
        .unwrap()
    }

    fn extract(html: &str) -> ExtractionReport {
        extract_courses(html, &default_selectors(), DEFAULT_ORIGIN)
    }

    fn record(title: &str, link: &str) -> CourseRecord {
        CourseRecord {
            title: title.to_string(),
            link: link.to_string(),
        }
    }

    #[test]
    fn well_formed_cards_keep_document_order() {
        let html = r#"
            <div class="courseCard"><h5>Compilers</h5><a href="/course/7">open</a></div>
            <div class="courseCard"><h5>Algorithms</h5><a href="/course/2">open</a></div>
            <div class="courseCard"><h5>Operating Systems</h5><a href="/course/5">open</a></div>
        "#;
        let report = extract(html);

        assert_eq!(
            report.records,
            vec![
                record("Compilers", "https://nptel.ac.in/course/7"),
                record("Algorithms", "https://nptel.ac.in/course/2"),
                record("Operating Systems", "https://nptel.ac.in/course/5"),
            ]
        );
        assert!(report.skipped.is_empty());
        assert_eq!(report.cards_seen(), 3);
    }

    #[test]
    fn card_without_link_is_dropped() {
        let html = r#"
            <div class="courseCard"><h5>Intro to AI</h5><a href="/course/1">go</a></div>
            <div class="courseCard"><h5>  Data Systems  </h5></div>
            <div class="courseCard"><h5>Networks</h5><a href="/course/3">go</a></div>
        "#;
        let report = extract(html);

        assert_eq!(
            report.records,
            vec![
                record("Intro to AI", "https://nptel.ac.in/course/1"),
                record("Networks", "https://nptel.ac.in/course/3"),
            ]
        );
        assert_eq!(
            report.skipped,
            vec![SkippedCard {
                position: 1,
                reason: SkipReason::MissingLink
            }]
        );
    }

    #[test]
    fn card_without_title_is_dropped() {
        let html = r#"
            <div class="courseCard"><h4>Not a title</h4><a href="/course/9">go</a></div>
            <div class="courseCard"><h5>Networks</h5><a href="/course/3">go</a></div>
        "#;
        let report = extract(html);

        assert_eq!(report.records, vec![record("Networks", "https://nptel.ac.in/course/3")]);
        assert_eq!(report.skipped[0].reason, SkipReason::MissingTitle);
        assert_eq!(report.skipped[0].position, 0);
    }

    #[test]
    fn whitespace_only_title_is_dropped() {
        let html = r#"<div class="courseCard"><h5>   </h5><a href="/course/4">go</a></div>"#;
        let report = extract(html);

        assert!(report.records.is_empty());
        assert_eq!(report.skipped[0].reason, SkipReason::BlankTitle);
    }

    #[test]
    fn anchor_without_href_is_not_a_link() {
        let html = r##"
            <div class="courseCard">
                <h5>Signals <small>and</small> Systems</h5>
                <a name="top">anchor</a>
                <div><a href="/course/11">details</a><a href="/course/12">other</a></div>
            </div>
        "##;
        let report = extract(html);

        assert_eq!(
            report.records,
            vec![record("Signals and Systems", "https://nptel.ac.in/course/11")]
        );
    }

    #[test]
    fn href_is_concatenated_verbatim() {
        let html = r#"<div class="courseCard"><h5>Maths</h5><a href="course/8?x=1">go</a></div>"#;
        let report = extract(html);

        assert_eq!(report.records[0].link, "https://nptel.ac.incourse/8?x=1");
    }

    #[test]
    fn only_div_cards_match() {
        let html = r#"
            <section class="courseCard"><h5>Ignored</h5><a href="/course/1">go</a></section>
            <div class="card"><h5>Also ignored</h5><a href="/course/2">go</a></div>
        "#;
        let report = extract(html);

        assert!(report.is_empty());
        assert_eq!(report.cards_seen(), 0);
    }

    #[test]
    fn custom_selectors_and_origin() {
        let selectors = CardSelectors::new("li.course", "span.name", "a.more[href]").unwrap();
        let html = r#"
            <ul>
                <li class="course"><span class="name"> Thermodynamics </span>
                    <a href="/skip">x</a><a class="more" href="/course/20">more</a></li>
            </ul>
        "#;
        let report = extract_courses(html, &selectors, "https://example.org");

        assert_eq!(
            report.records,
            vec![record("Thermodynamics", "https://example.org/course/20")]
        );
    }

    #[test]
    fn bad_selector_is_reported() {
        let err = CardSelectors::new("div..broken", "h5", "a[href]").unwrap_err();
        match err {
            ScrapeError::InvalidSelector { selector, .. } => assert_eq!(selector, "div..broken"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
