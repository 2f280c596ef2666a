//! Catalogue records returned by the movie service.
//!
//! The wire format uses camelCase keys (`filmCompanyId`); the Rust types use
//! snake case and rename on (de)serialisation.

use serde::{Deserialize, Serialize};

/// A movie listed by the catalogue service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Unique movie identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Review scores in the order the service returned them.
    #[serde(default)]
    pub reviews: Vec<f64>,
    /// Identifier of the [`MovieCompany`] that produced the film.
    pub film_company_id: String,
}

impl Movie {
    /// Arithmetic mean of the review scores.
    ///
    /// A movie without reviews has no defined average, so the result is
    /// `NaN`. Callers render it as-is.
    #[must_use]
    pub fn average_score(&self) -> f64 {
        average_score(&self.reviews)
    }

    /// Returns true when the movie has at least one review score.
    #[must_use]
    pub const fn is_rated(&self) -> bool {
        !self.reviews.is_empty()
    }
}

/// A film company referenced by [`Movie::film_company_id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieCompany {
    /// Unique company identifier.
    pub id: String,
    /// Company display name.
    pub name: String,
}

/// Computes `sum / count` over review scores.
///
/// Returns `NaN` for an empty slice (0 / 0).
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "averaging review scores is inherently floating point"
)]
#[expect(
    clippy::cast_precision_loss,
    reason = "review counts are far below 2^52"
)]
pub fn average_score(scores: &[f64]) -> f64 {
    let sum: f64 = scores.iter().sum();
    sum / scores.len() as f64
}

/// Formats an average score with one decimal place.
///
/// `NaN` renders as the literal `NaN`.
#[must_use]
pub fn format_average(average: f64) -> String {
    format!("{average:.1}")
}

/// Looks up the display name of a company by identifier.
#[must_use]
pub fn company_name<'a>(companies: &'a [MovieCompany], company_id: &str) -> Option<&'a str> {
    companies
        .iter()
        .find(|company| company.id == company_id)
        .map(|company| company.name.as_str())
}

#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    //! Builders for catalogue records used across unit and behavioural tests.

    use super::{Movie, MovieCompany};

    /// Creates a movie with the given id, title, scores, and company id.
    #[must_use]
    pub fn movie(id: &str, title: &str, reviews: &[f64], film_company_id: &str) -> Movie {
        Movie {
            id: id.to_owned(),
            title: title.to_owned(),
            reviews: reviews.to_vec(),
            film_company_id: film_company_id.to_owned(),
        }
    }

    /// Creates a film company.
    #[must_use]
    pub fn company(id: &str, name: &str) -> MovieCompany {
        MovieCompany {
            id: id.to_owned(),
            name: name.to_owned(),
        }
    }
}
