use crate::catalog::INDUSTRY_TARGETS;
use crate::models::assessment::SkillRatings;
use crate::models::recommendation::{SkillGap, SkillsGapReport};

const MAX_GAP_RECOMMENDATIONS: usize = 3;

/// Compares self-rated skills against industry targets.
/// Unrated skills count as level 0.
pub fn analyze_skills_gap(skills: &SkillRatings) -> SkillsGapReport {
    let gaps: Vec<SkillGap> = INDUSTRY_TARGETS
        .iter()
        .map(|(key, label, target)| {
            let current = skills.get(*key).copied().unwrap_or(0);
            SkillGap {
                skill: label.to_string(),
                current,
                target: *target,
                gap: target.saturating_sub(current),
            }
        })
        .collect();

    let recommendations = improvement_recommendations(&gaps);

    SkillsGapReport {
        gaps,
        recommendations,
    }
}

fn improvement_recommendations(gaps: &[SkillGap]) -> Vec<String> {
    gaps.iter()
        .filter(|g| g.gap > 0)
        .take(MAX_GAP_RECOMMENDATIONS)
        .map(|g| {
            format!(
                "Improve {} by {} level(s) to meet industry standards",
                g.skill, g.gap
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assessment::default_skills;

    #[test]
    fn test_default_skills_gaps() {
        let report = analyze_skills_gap(&default_skills());
        assert_eq!(report.gaps.len(), INDUSTRY_TARGETS.len());

        let programming = &report.gaps[0];
        assert_eq!(programming.skill, "Programming");
        assert_eq!((programming.current, programming.target, programming.gap), (3, 4, 1));

        let data = &report.gaps[1];
        assert_eq!(data.skill, "Data Analysis");
        assert_eq!(data.gap, 2);

        // digitalmarketing 4 vs target 3: no negative gaps
        assert_eq!(report.gaps[2].gap, 0);
    }

    #[test]
    fn test_recommendations_only_for_positive_gaps() {
        let report = analyze_skills_gap(&default_skills());
        assert_eq!(
            report.recommendations,
            vec![
                "Improve Programming by 1 level(s) to meet industry standards",
                "Improve Data Analysis by 2 level(s) to meet industry standards",
            ]
        );
    }

    #[test]
    fn test_recommendations_capped_at_three() {
        let report = analyze_skills_gap(&SkillRatings::new());
        assert!(report.gaps.iter().all(|g| g.current == 0 && g.gap == g.target));
        assert_eq!(report.recommendations.len(), 3);
    }

    #[test]
    fn test_no_gaps_no_recommendations() {
        let maxed: SkillRatings = INDUSTRY_TARGETS
            .iter()
            .map(|(k, _, _)| (k.to_string(), 5))
            .collect();
        let report = analyze_skills_gap(&maxed);
        assert!(report.recommendations.is_empty());
    }
}
