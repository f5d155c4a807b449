use log::debug;
use serde::{Deserialize, Serialize};

use crate::assessment::Response;
use crate::catalog::{self, Category};
use crate::error::{EngineError, Result};

/// Discrete bucket for a category's weighted quality score.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QualityLevel {
    Excellent,
    Good,
    Moderate,
    NeedsAttention,
}

impl QualityLevel {
    fn from_score(score: f64) -> Self {
        if score >= 4.5 {
            QualityLevel::Excellent
        } else if score >= 4.0 {
            QualityLevel::Good
        } else if score >= 3.0 {
            QualityLevel::Moderate
        } else {
            QualityLevel::NeedsAttention
        }
    }
}

/// One category's derived record for a single partner.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CategoryInsight {
    pub category: Category,
    pub score: f64,
    pub level: QualityLevel,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Full single-partner analysis consumed by the report formatters. External
/// formatters rely on `score` staying on the 0-5 scale (they multiply the
/// overall score by 20 to show a 0-100% figure).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct QualityOfLifeReport {
    pub overall_score: f64,
    pub category_insights: Vec<CategoryInsight>,
    pub strengths: Vec<Category>,
    pub growth_areas: Vec<Category>,
    pub personality_profile: String,
    pub relationship_readiness: String,
}

/// Weighted category score. High-importance categories are rewarded for
/// moderate flexibility (peak multiplier 1.0 at 2.5) and penalized
/// symmetrically toward either extreme, so a category rated maximally
/// important and maximally rigid scores 0. Low-importance categories pass
/// the raw importance average through unweighted.
fn quality_score(avg_importance: f64, avg_flexibility: f64) -> f64 {
    if avg_importance >= 3.0 {
        avg_importance * (1.0 - (avg_flexibility - 2.5).abs() / 2.5)
    } else {
        avg_importance
    }
}

fn insight_lines(category: Category, avg_importance: f64, avg_flexibility: f64) -> Vec<String> {
    let mut insights = Vec::with_capacity(2);

    if avg_importance >= 4.5 {
        insights.push(format!(
            "{} is extremely important to you and forms a core part of your value system.",
            category
        ));
    } else if avg_importance >= 4.0 {
        insights.push(format!(
            "{} matters significantly to you and will influence major life decisions.",
            category
        ));
    } else if avg_importance >= 3.0 {
        insights.push(format!(
            "{} has moderate importance in your life priorities.",
            category
        ));
    } else {
        insights.push(format!(
            "{} is currently less of a priority for you.",
            category
        ));
    }

    if avg_flexibility <= 2.0 {
        insights.push(
            "You show high flexibility in this area, indicating openness to compromise and adaptation."
                .to_string(),
        );
    } else if avg_flexibility <= 3.5 {
        insights.push(
            "You have moderate flexibility, balancing personal preferences with willingness to adapt."
                .to_string(),
        );
    } else {
        insights.push(
            "You have strong convictions in this area with limited flexibility for compromise."
                .to_string(),
        );
    }

    insights
}

fn category_recommendations(
    category: Category,
    level: QualityLevel,
    avg_importance: f64,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    match category {
        Category::CoreValuesEthics => {
            if level == QualityLevel::Excellent {
                recommendations
                    .push("Your strong ethical foundation will serve you well in relationships.".to_string());
                recommendations
                    .push("Consider sharing your values openly with potential partners.".to_string());
            } else if level == QualityLevel::NeedsAttention {
                recommendations
                    .push("Reflect on your core values and how they guide your decisions.".to_string());
                recommendations.push(
                    "Consider exploring philosophical or ethical frameworks that resonate with you."
                        .to_string(),
                );
            }
        }
        Category::Religion => {
            if avg_importance >= 4.0 {
                recommendations
                    .push("Seek partners who share or respect your religious beliefs.".to_string());
                recommendations.push(
                    "Consider how your faith will influence family life and major decisions."
                        .to_string(),
                );
            } else {
                recommendations.push(
                    "Be open about your level of religious involvement with potential partners."
                        .to_string(),
                );
            }
        }
        Category::ChildrenParenting => {
            if avg_importance >= 4.0 {
                recommendations.push(
                    "Have clear conversations about family planning early in relationships."
                        .to_string(),
                );
                recommendations.push(
                    "Consider your parenting philosophy and discuss it with potential partners."
                        .to_string(),
                );
            }
        }
        Category::Finances => {
            if level == QualityLevel::NeedsAttention {
                recommendations
                    .push("Develop financial literacy and create a personal budget.".to_string());
                recommendations.push(
                    "Consider speaking with a financial advisor about long-term planning."
                        .to_string(),
                );
            }
        }
        Category::CommunicationConflict => {
            if level == QualityLevel::NeedsAttention {
                recommendations.push(
                    "Practice active listening skills and healthy conflict resolution.".to_string(),
                );
                recommendations.push(
                    "Consider relationship communication workshops or counseling.".to_string(),
                );
            }
        }
        _ => {
            if level == QualityLevel::Excellent {
                recommendations.push(format!(
                    "Your approach to {} shows maturity and clarity.",
                    category.display_name().to_lowercase()
                ));
            } else if level == QualityLevel::NeedsAttention {
                recommendations.push(format!(
                    "Consider reflecting more deeply on your priorities regarding {}.",
                    category.display_name().to_lowercase()
                ));
            }
        }
    }

    recommendations
}

fn personality_profile(responses: &[Response]) -> String {
    let count = responses.len() as f64;
    let avg_importance =
        responses.iter().map(|r| r.importance.get() as f64).sum::<f64>() / count;
    let avg_flexibility =
        responses.iter().map(|r| r.flexibility.get() as f64).sum::<f64>() / count;

    if avg_importance >= 4.0 && avg_flexibility <= 2.5 {
        "The Adaptive Achiever: You have clear priorities but remain flexible in how you achieve \
         them. This balance makes you an excellent partner who can maintain standards while \
         compromising when needed."
            .to_string()
    } else if avg_importance >= 4.0 && avg_flexibility >= 4.0 {
        "The Determined Idealist: You have strong convictions and high standards. While this \
         clarity is admirable, consider areas where flexibility might strengthen your \
         relationships."
            .to_string()
    } else if avg_importance <= 3.0 && avg_flexibility <= 2.5 {
        "The Easy-Going Supporter: You're highly adaptable and accommodating. While this makes \
         you a supportive partner, ensure your own needs and preferences are also heard and \
         valued."
            .to_string()
    } else {
        "The Balanced Individual: You show a healthy mix of having preferences while remaining \
         flexible. This balanced approach serves you well in building harmonious relationships."
            .to_string()
    }
}

fn relationship_readiness(category_insights: &[CategoryInsight]) -> String {
    let needs_attention = category_insights
        .iter()
        .filter(|c| c.level == QualityLevel::NeedsAttention)
        .count();
    let excellent = category_insights
        .iter()
        .filter(|c| c.level == QualityLevel::Excellent)
        .count();

    // Ordered chain: the first matching band wins.
    if needs_attention <= 1 && excellent >= 8 {
        "Highly Ready: You demonstrate strong self-awareness and clarity across most life areas. \
         You're well-prepared for a committed relationship and likely to be a thoughtful, \
         engaged partner."
            .to_string()
    } else if needs_attention <= 3 {
        "Well Prepared: You have good self-awareness in most areas with some room for growth. \
         Continue developing in areas that need attention, and you'll be an excellent partner."
            .to_string()
    } else if needs_attention <= 5 {
        "Developing Readiness: You have clarity in some areas but would benefit from more \
         self-reflection in others. Consider this assessment as a starting point for personal \
         growth before committing to a serious relationship."
            .to_string()
    } else {
        "Early Development Stage: You're in the process of discovering your priorities and \
         preferences. Take time for personal growth and self-discovery before making major \
         relationship commitments."
            .to_string()
    }
}

/// Derive a single partner's quality-of-life report from their answered
/// responses. Pure: identical input always yields identical output.
///
/// Only categories with at least one answered response are included; an
/// entirely empty input is rejected before any averaging happens.
pub fn analyze(responses: &[Response]) -> Result<QualityOfLifeReport> {
    if responses.is_empty() {
        return Err(EngineError::NoResponses);
    }

    debug!("Analyzing quality of life over {} responses", responses.len());

    let mut category_insights = Vec::new();

    for &category in &Category::ALL {
        let in_category: Vec<&Response> = responses
            .iter()
            .filter(|r| {
                catalog::question_by_id(r.question_id)
                    .map(|q| q.category == category)
                    .unwrap_or(false)
            })
            .collect();

        if in_category.is_empty() {
            continue;
        }

        let count = in_category.len() as f64;
        let avg_importance =
            in_category.iter().map(|r| r.importance.get() as f64).sum::<f64>() / count;
        let avg_flexibility =
            in_category.iter().map(|r| r.flexibility.get() as f64).sum::<f64>() / count;

        let score = quality_score(avg_importance, avg_flexibility);
        let level = QualityLevel::from_score(score);

        category_insights.push(CategoryInsight {
            category,
            score,
            level,
            insights: insight_lines(category, avg_importance, avg_flexibility),
            recommendations: category_recommendations(category, level, avg_importance),
        });
    }

    if category_insights.is_empty() {
        // responses referenced no known question
        return Err(EngineError::NoResponses);
    }

    let overall_score = category_insights.iter().map(|c| c.score).sum::<f64>()
        / category_insights.len() as f64;

    let strengths: Vec<Category> = category_insights
        .iter()
        .filter(|c| matches!(c.level, QualityLevel::Excellent | QualityLevel::Good))
        .map(|c| c.category)
        .take(5)
        .collect();

    let growth_areas: Vec<Category> = category_insights
        .iter()
        .filter(|c| matches!(c.level, QualityLevel::NeedsAttention | QualityLevel::Moderate))
        .map(|c| c.category)
        .take(3)
        .collect();

    let readiness = relationship_readiness(&category_insights);

    Ok(QualityOfLifeReport {
        overall_score,
        personality_profile: personality_profile(responses),
        relationship_readiness: readiness,
        category_insights,
        strengths,
        growth_areas,
    })
}
