//! Main-content candidate scoring.
//!
//! Noise elements are stripped first, then every `article`, `main`,
//! `section`, `div` and `p` competes on
//! `text_len * tag_weight * (1 - min(link_density, cap))`. Nested candidates
//! compete independently; the highest score wins and ties keep the earlier
//! element in document order.

use crate::dom::{Document, NodeId};
use crate::link_density::collect_link_stats;
use crate::{Error, Options, Result};

/// Tags considered as main-content candidates, in selector order.
pub const CANDIDATE_TAGS: &[&str] = &["article", "main", "section", "div", "p"];

/// Weight applied to tags outside [`CandidateTag`].
pub const DEFAULT_TAG_WEIGHT: f64 = 1.0;

/// The closed set of candidate tags and their prior weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateTag {
    /// `article`
    Article,
    /// `main`
    Main,
    /// `section`
    Section,
    /// `div`
    Div,
    /// `p`
    Paragraph,
}

impl CandidateTag {
    /// Every candidate tag, in the order of [`CANDIDATE_TAGS`].
    pub const ALL: [CandidateTag; 5] = [
        CandidateTag::Article,
        CandidateTag::Main,
        CandidateTag::Section,
        CandidateTag::Div,
        CandidateTag::Paragraph,
    ];

    /// Map a lower-cased tag name to its candidate tag.
    #[must_use]
    pub fn from_tag_name(tag: &str) -> Option<Self> {
        match tag {
            "article" => Some(Self::Article),
            "main" => Some(Self::Main),
            "section" => Some(Self::Section),
            "div" => Some(Self::Div),
            "p" => Some(Self::Paragraph),
            _ => None,
        }
    }

    /// Lower-cased tag name.
    #[must_use]
    pub fn tag_name(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Main => "main",
            Self::Section => "section",
            Self::Div => "div",
            Self::Paragraph => "p",
        }
    }

    /// Prior likelihood of the tag holding the main content.
    #[must_use]
    pub fn weight(self) -> f64 {
        match self {
            Self::Article => 3.0,
            Self::Main => 2.5,
            Self::Section => 2.0,
            Self::Div => 1.0,
            Self::Paragraph => 0.5,
        }
    }
}

/// Weight for any tag name, [`DEFAULT_TAG_WEIGHT`] when it is not a candidate tag.
#[must_use]
pub fn tag_weight(tag: &str) -> f64 {
    CandidateTag::from_tag_name(tag).map_or(DEFAULT_TAG_WEIGHT, CandidateTag::weight)
}

/// A scored element. Only lives for the duration of a selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// The scored element.
    pub node: NodeId,
    /// Weighted, link-penalized score.
    pub score: f64,
    /// Trimmed text length in characters.
    pub text_len: usize,
    /// Share of the text inside links, before the cap is applied.
    pub link_density: f64,
}

/// Raw score formula.
///
/// The penalty is capped so a link-only candidate keeps `1 - cap` of its
/// weighted length instead of dropping to zero.
#[must_use]
pub fn compute_score(text_len: usize, weight: f64, link_density: f64, cap: f64) -> f64 {
    text_len as f64 * weight * (1.0 - link_density.min(cap))
}

/// Detach every element named in `options.noise_tags`.
///
/// Returns the number of elements removed.
pub fn strip_noise(doc: &mut Document, options: &Options) -> usize {
    let tags: Vec<&str> = options.noise_tags.iter().map(String::as_str).collect();
    let noise = doc.select(doc.root(), &tags);
    for &id in &noise {
        doc.remove(id);
    }
    noise.len()
}

/// Score one element, or `None` when its text is too short to be content.
#[must_use]
pub fn score_candidate(doc: &Document, id: NodeId, options: &Options) -> Option<Candidate> {
    let text_len = doc.text(id).trim().chars().count();
    if text_len <= options.min_candidate_len {
        return None;
    }

    let density = collect_link_stats(doc, id, text_len).density();
    let weight = doc.tag_name(id).map_or(DEFAULT_TAG_WEIGHT, tag_weight);

    Some(Candidate {
        node: id,
        score: compute_score(text_len, weight, density, options.link_density_cap),
        text_len,
        link_density: density,
    })
}

/// Pick the best candidate from an already de-noised document.
///
/// # Errors
///
/// Returns [`Error::ContentParseFailed`] when no candidate passes the length
/// filter.
pub fn best_candidate(doc: &Document, options: &Options) -> Result<Candidate> {
    let candidates = doc.select(doc.root(), CANDIDATE_TAGS);
    let scanned = candidates.len();

    let best = candidates
        .into_iter()
        .filter_map(|id| score_candidate(doc, id, options))
        .fold(None, |best: Option<Candidate>, candidate| match best {
            Some(current) if candidate.score <= current.score => Some(current),
            _ => Some(candidate),
        });

    match best {
        Some(candidate) => {
            tracing::debug!(
                scanned,
                tag = doc.tag_name(candidate.node).unwrap_or_default(),
                score = candidate.score,
                text_len = candidate.text_len,
                "selected main content"
            );
            Ok(candidate)
        }
        None => {
            tracing::debug!(scanned, "no content candidate passed the length filter");
            Err(Error::ContentParseFailed)
        }
    }
}

/// Strip noise from `doc` and select the element most likely to be the
/// article.
///
/// # Errors
///
/// Returns [`Error::ContentParseFailed`] when the document has no candidate
/// tags or none of them carries enough text.
pub fn select_main_content(doc: &mut Document, options: &Options) -> Result<Candidate> {
    let removed = strip_noise(doc, options);
    tracing::trace!(removed, "stripped noise elements");
    best_candidate(doc, options)
}
