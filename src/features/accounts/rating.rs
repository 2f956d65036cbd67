//! Star rating presentation for account rating aggregates.

/// Number of stars rendered for a rating.
const STAR_COUNT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Star {
    /// Material Symbols icon name.
    pub fn icon(self) -> &'static str {
        match self {
            Star::Full => "star",
            Star::Half => "star_half",
            Star::Empty => "star_border",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RatingModel {
    pub stars: [Star; STAR_COUNT],
    /// Average with one decimal, or `-` when there is none.
    pub average: String,
    pub review_count: String,
}

impl Default for RatingModel {
    fn default() -> Self {
        Self::build(None, None)
    }
}

impl RatingModel {
    /// Missing values count as zero.
    pub fn build(average: Option<f64>, reviews: Option<u32>) -> Self {
        let average = average.filter(|value| value.is_finite()).unwrap_or(0.0);
        let reviews = reviews.unwrap_or(0);

        let mut stars = [Star::Empty; STAR_COUNT];
        for (index, star) in stars.iter_mut().enumerate() {
            let position = index as f64;
            *star = if average >= position + 1.0 {
                Star::Full
            } else if average >= position + 0.5 {
                Star::Half
            } else {
                Star::Empty
            };
        }

        let average = if average == 0.0 {
            "-".to_string()
        } else {
            format!("{average:.1}")
        };

        Self {
            stars,
            average,
            review_count: format!("({reviews} review(s))"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RatingModel, Star};

    #[test]
    fn empty_rating_renders_placeholders() {
        let model = RatingModel::default();
        assert_eq!(model.stars, [Star::Empty; 5]);
        assert_eq!(model.average, "-");
        assert_eq!(model.review_count, "(0 review(s))");
    }

    #[test]
    fn half_stars_start_at_point_five() {
        let model = RatingModel::build(Some(3.5), Some(8));
        assert_eq!(
            model.stars,
            [Star::Full, Star::Full, Star::Full, Star::Half, Star::Empty]
        );
        assert_eq!(model.average, "3.5");
        assert_eq!(model.review_count, "(8 review(s))");

        let below = RatingModel::build(Some(3.49), Some(1));
        assert_eq!(below.stars[3], Star::Empty);
        assert_eq!(below.average, "3.5");
    }

    #[test]
    fn full_rating_fills_every_star() {
        let model = RatingModel::build(Some(5.0), Some(1));
        assert_eq!(model.stars, [Star::Full; 5]);
        assert_eq!(model.average, "5.0");
        assert_eq!(Star::Full.icon(), "star");
        assert_eq!(Star::Half.icon(), "star_half");
        assert_eq!(Star::Empty.icon(), "star_border");
    }
}
