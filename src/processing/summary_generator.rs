//! Professional summary generation from structured resume fields

use crate::config::SummaryConfig;
use crate::processing::dates::{months_between, parse_date};
use crate::processing::vocabulary::{EducationTier, Vocabulary};
use crate::resume::{Education, Experience, Project, ResumeRecord};
use chrono::{Local, NaiveDate};
use log::debug;

pub struct SummaryGenerator {
    education_tiers: Vec<EducationTier>,
    config: SummaryConfig,
    reference_date: Option<NaiveDate>,
}

impl SummaryGenerator {
    pub fn new(vocabulary: &Vocabulary, config: SummaryConfig) -> Self {
        Self {
            education_tiers: vocabulary.education_tiers.clone(),
            config,
            reference_date: None,
        }
    }

    /// Pin the date used as the end of `current` positions. Without it the
    /// local date at generation time is used.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn generate(&self, resume: &ResumeRecord) -> String {
        let years = self.years_of_experience(&resume.experience);
        let highest_education = self.highest_education(&resume.education);
        let top_skills = self.top_skills(resume);
        let achievements = self.key_achievements(&resume.experience, &resume.projects);

        debug!(
            "Generating summary: {:.1} years of experience, {} top skills, {} achievements",
            years,
            top_skills.len(),
            achievements.len()
        );

        let title = resume.personal_info.job_title.trim();
        let summary = if years > 0.0 {
            Self::experienced_summary(
                title,
                years,
                &top_skills,
                &achievements,
                highest_education.as_deref(),
                &resume.keywords,
            )
        } else {
            Self::entry_level_summary(
                title,
                &top_skills,
                highest_education.as_deref(),
                &resume.projects,
            )
        };

        self.truncate(summary.trim_end())
    }

    /// Total dated experience in years, rounded to one decimal place
    pub fn years_of_experience(&self, experience: &[Experience]) -> f64 {
        let today = self.today();

        let total_months: i64 = experience
            .iter()
            .filter_map(|exp| {
                let start = parse_date(&exp.start_date)?;
                let end = if exp.current {
                    today
                } else {
                    parse_date(&exp.end_date)?
                };
                Some(months_between(start, end).max(0))
            })
            .sum();

        (total_months as f64 / 12.0 * 10.0).round() / 10.0
    }

    /// `"<degree> from <institution>"` for the best ranked degree
    pub fn highest_education(&self, education: &[Education]) -> Option<String> {
        let mut best: Option<(&Education, u8)> = None;

        for edu in education.iter().filter(|e| !e.degree.trim().is_empty()) {
            let degree = edu.degree.to_lowercase();
            let rank = self
                .education_tiers
                .iter()
                .filter(|tier| tier.keywords.iter().any(|k| degree.contains(&k.to_lowercase())))
                .map(|tier| tier.rank)
                .max()
                .unwrap_or(0);

            match best {
                Some((_, best_rank)) if rank <= best_rank => {}
                _ => best = Some((edu, rank)),
            }
        }

        best.map(|(edu, _)| {
            if edu.institution.trim().is_empty() {
                edu.degree.clone()
            } else {
                format!("{} from {}", edu.degree, edu.institution)
            }
        })
    }

    /// Skills that relate to an extracted keyword first, then the rest
    pub fn top_skills(&self, resume: &ResumeRecord) -> Vec<String> {
        let keywords: Vec<String> = resume.keywords.iter().map(|k| k.to_lowercase()).collect();

        let (prioritized, remaining): (Vec<&str>, Vec<&str>) =
            resume.all_skills().partition(|skill| {
                let skill = skill.to_lowercase();
                keywords
                    .iter()
                    .any(|k| skill.contains(k.as_str()) || k.contains(skill.as_str()))
            });

        prioritized
            .into_iter()
            .chain(remaining)
            .take(self.config.top_skills)
            .map(str::to_string)
            .collect()
    }

    /// Work achievements first; project achievements only fill a short list
    pub fn key_achievements(&self, experience: &[Experience], projects: &[Project]) -> Vec<String> {
        let non_blank = |a: &&String| !a.trim().is_empty();

        let mut achievements: Vec<&String> = experience
            .iter()
            .flat_map(|exp| exp.achievements.iter().filter(non_blank))
            .collect();

        if achievements.len() < self.config.key_achievements {
            achievements.extend(
                projects
                    .iter()
                    .flat_map(|proj| proj.achievements.iter().filter(non_blank)),
            );
        }

        achievements
            .into_iter()
            .take(self.config.key_achievements)
            .cloned()
            .collect()
    }

    fn experienced_summary(
        title: &str,
        years: f64,
        top_skills: &[String],
        achievements: &[String],
        highest_education: Option<&str>,
        keywords: &[String],
    ) -> String {
        // A blank title reads as a generic role rather than a dangling "with"
        let title = if title.is_empty() { "Professional" } else { title };
        let mut summary = format!("{} with {} of experience", title, format_years(years));

        if !top_skills.is_empty() {
            let leading: Vec<&str> = top_skills.iter().take(3).map(String::as_str).collect();
            summary.push_str(&format!(" specializing in {}", leading.join(", ")));
        }
        summary.push_str(". ");

        if let Some(first) = achievements.first() {
            summary.push_str(&format!("Proven track record of {}", first.to_lowercase()));
            if let Some(second) = achievements.get(1) {
                summary.push_str(&format!(" and {}", second.to_lowercase()));
            }
            summary.push_str(". ");
        }

        if let Some(education) = highest_education {
            summary.push_str(&format!("{}. ", education));
        }

        let mentioned = summary.to_lowercase();
        let relevant: Vec<&str> = keywords
            .iter()
            .filter(|k| !top_skills.contains(k) && !mentioned.contains(&k.to_lowercase()))
            .take(3)
            .map(String::as_str)
            .collect();
        if !relevant.is_empty() {
            summary.push_str(&format!("Skilled in {}.", relevant.join(", ")));
        }

        summary
    }

    fn entry_level_summary(
        title: &str,
        top_skills: &[String],
        highest_education: Option<&str>,
        projects: &[Project],
    ) -> String {
        let mut summary = match highest_education {
            Some(education) if title.is_empty() => format!("{} professional. ", education),
            Some(education) => format!("{} aspiring to work as a {}. ", education, title),
            None => {
                let who = if title.is_empty() {
                    "Professional".to_string()
                } else {
                    format!("Aspiring {}", title)
                };
                let passion = if top_skills.is_empty() {
                    "the field".to_string()
                } else {
                    top_skills.iter().take(2).cloned().collect::<Vec<_>>().join(" and ")
                };
                format!("{} with a passion for {}. ", who, passion)
            }
        };

        if let Some(first) = projects.first().filter(|p| !p.title.trim().is_empty()) {
            let noun = if projects.len() == 1 { "project" } else { "projects" };
            summary.push_str(&format!(
                "Experience with {} {} including {}",
                projects.len(),
                noun,
                first.title
            ));
            if let Some(second) = projects.get(1).filter(|p| !p.title.trim().is_empty()) {
                summary.push_str(&format!(" and {}", second.title));
            }
            summary.push_str(". ");
        }

        if !top_skills.is_empty() {
            let listed: Vec<&str> = top_skills.iter().take(4).map(String::as_str).collect();
            summary.push_str(&format!("Proficient in {}.", listed.join(", ")));
        }

        summary
    }

    /// Cut overlong summaries back to a sentence boundary where possible
    fn truncate(&self, summary: &str) -> String {
        if summary.chars().count() <= self.config.max_chars {
            return summary.to_string();
        }

        let cut: String = summary.chars().take(self.config.max_chars).collect();
        let cut = cut.trim();

        let last_period = cut.char_indices().filter(|(_, c)| *c == '.').last();
        match last_period {
            Some((byte_index, _)) if cut[..byte_index].chars().count() >= self.config.backtrack_floor => {
                cut[..=byte_index].to_string()
            }
            _ => format!("{}.", cut),
        }
    }
}

impl Default for SummaryGenerator {
    fn default() -> Self {
        Self::new(&Vocabulary::builtin(), SummaryConfig::default())
    }
}

/// Human phrasing for a duration in years
pub fn format_years(years: f64) -> String {
    if years < 1.0 {
        "less than a year".to_string()
    } else if years == 1.0 {
        "1 year".to_string()
    } else if years.fract() == 0.0 {
        format!("{} years", years as u64)
    } else {
        format!("{}+ years", years.floor() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::{PersonalInfo, SkillCategory};

    fn generator() -> SummaryGenerator {
        SummaryGenerator::default()
            .with_reference_date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
    }

    fn job(start: &str, end: &str, current: bool) -> Experience {
        Experience {
            title: "Engineer".to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            current,
            ..Default::default()
        }
    }

    fn degree(degree: &str, institution: &str) -> Education {
        Education {
            degree: degree.to_string(),
            institution: institution.to_string(),
            ..Default::default()
        }
    }

    fn skills(list: &[&str]) -> Vec<SkillCategory> {
        vec![SkillCategory {
            category: "General".to_string(),
            skills: list.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }]
    }

    fn strings(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_years_of_experience() {
        let g = generator();
        assert_eq!(g.years_of_experience(&[job("01/2020", "01/2023", false)]), 3.0);
        assert_eq!(g.years_of_experience(&[job("2020", "July 2021", false)]), 1.5);
        // current roles run to the reference date
        assert_eq!(g.years_of_experience(&[job("06/2023", "", true)]), 1.0);
        assert_eq!(g.years_of_experience(&[]), 0.0);
    }

    #[test]
    fn test_invalid_ranges_are_ignored() {
        let g = generator();
        let experience = vec![
            job("01/2023", "01/2020", false),
            job("whenever", "2021", false),
            job("2020", "", false),
            job("01/2021", "07/2021", false),
        ];
        assert_eq!(g.years_of_experience(&experience), 0.5);
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_years(0.4), "less than a year");
        assert_eq!(format_years(1.0), "1 year");
        assert_eq!(format_years(3.0), "3 years");
        assert_eq!(format_years(4.7), "4+ years");
    }

    #[test]
    fn test_highest_education() {
        let g = generator();
        let education = vec![
            degree("High School", "Central High"),
            degree("Bachelor of Science", "State University"),
            degree("PhD in Physics", "Tech Institute"),
            degree("Master of Arts", ""),
        ];
        assert_eq!(
            g.highest_education(&education).as_deref(),
            Some("PhD in Physics from Tech Institute")
        );
    }

    #[test]
    fn test_highest_education_falls_back_to_first_degree() {
        let g = generator();
        let education = vec![degree("", "Nowhere"), degree("High School", ""), degree("GED", "")];
        assert_eq!(g.highest_education(&education).as_deref(), Some("High School"));
        assert_eq!(g.highest_education(&[]), None);
    }

    #[test]
    fn test_top_skills_prioritize_keywords() {
        let g = generator();
        let record = ResumeRecord {
            skills: skills(&["Photoshop", "Rust", "Excel", "PostgreSQL", "Go", "Docker", "Vim"]),
            keywords: strings(&["SQL", "Docker"]),
            ..Default::default()
        };

        let top = g.top_skills(&record);
        assert_eq!(top, vec!["PostgreSQL", "Docker", "Photoshop", "Rust", "Excel"]);
    }

    #[test]
    fn test_top_skills_span_categories_in_order() {
        let g = generator();
        let mut categories = skills(&["Figma"]);
        categories.push(SkillCategory {
            category: "Backend".to_string(),
            skills: strings(&["Go", "Redis"]),
            ..Default::default()
        });
        let record = ResumeRecord {
            skills: categories,
            keywords: strings(&["redis"]),
            ..Default::default()
        };

        assert_eq!(g.top_skills(&record), vec!["Redis", "Figma", "Go"]);
    }

    #[test]
    fn test_entry_level_summary_single_project() {
        let record = ResumeRecord {
            personal_info: PersonalInfo {
                job_title: "Dev".to_string(),
                ..Default::default()
            },
            projects: vec![Project {
                title: "Alpha".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let summary = generator().generate(&record);
        assert_eq!(
            summary,
            "Aspiring Dev with a passion for the field. Experience with 1 project including Alpha."
        );
    }

    #[test]
    fn test_experienced_summary_blank_title_reads_professional() {
        let record = ResumeRecord {
            experience: vec![job("01/2020", "01/2023", false)],
            ..Default::default()
        };

        let summary = generator().generate(&record);
        assert_eq!(summary, "Professional with 3 years of experience.");
    }

    #[test]
    fn test_key_achievements_fill_from_projects() {
        let g = generator();
        let mut exp = job("2020", "2021", false);
        exp.achievements = strings(&["  ", "Shipped the billing system"]);
        let project = Project {
            title: "Side Project".to_string(),
            achievements: strings(&["Reached 1k stars", "Wrote docs"]),
            ..Default::default()
        };

        let achievements = g.key_achievements(&[exp], &[project]);
        assert_eq!(achievements, vec!["Shipped the billing system", "Reached 1k stars"]);
    }

    #[test]
    fn test_experienced_summary() {
        let mut exp = job("01/2020", "01/2023", false);
        exp.achievements = strings(&["Reduced latency by 40%", "Led a team of five"]);
        let record = ResumeRecord {
            personal_info: PersonalInfo {
                job_title: "Backend Engineer".to_string(),
                ..Default::default()
            },
            experience: vec![exp],
            education: vec![degree("BSc Computer Science", "MIT")],
            skills: skills(&["Rust", "PostgreSQL", "Docker", "Kafka"]),
            keywords: strings(&["Rust", "Kubernetes", "SQL", "Leadership"]),
            ..Default::default()
        };

        let summary = generator().generate(&record);
        assert_eq!(
            summary,
            "Backend Engineer with 3 years of experience specializing in Rust, PostgreSQL, Docker. \
             Proven track record of reduced latency by 40% and led a team of five. \
             BSc Computer Science from MIT. Skilled in Kubernetes, Leadership."
        );
    }

    #[test]
    fn test_entry_level_summary_with_education() {
        let record = ResumeRecord {
            personal_info: PersonalInfo {
                job_title: "Data Analyst".to_string(),
                ..Default::default()
            },
            education: vec![degree("BA Economics", "UCLA")],
            projects: vec![
                Project {
                    title: "Churn Model".to_string(),
                    ..Default::default()
                },
                Project {
                    title: "Sales Dashboard".to_string(),
                    ..Default::default()
                },
            ],
            skills: skills(&["Python", "SQL", "Tableau", "Excel", "R"]),
            ..Default::default()
        };

        let summary = generator().generate(&record);
        assert_eq!(
            summary,
            "BA Economics from UCLA aspiring to work as a Data Analyst. \
             Experience with 2 projects including Churn Model and Sales Dashboard. \
             Proficient in Python, SQL, Tableau, Excel."
        );
    }

    #[test]
    fn test_entry_level_summary_without_anything() {
        let summary = generator().generate(&ResumeRecord::default());
        assert_eq!(summary, "Professional with a passion for the field.");
    }

    #[test]
    fn test_entry_level_summary_without_education() {
        let record = ResumeRecord {
            personal_info: PersonalInfo {
                job_title: "Web Developer".to_string(),
                ..Default::default()
            },
            skills: skills(&["HTML", "CSS", "JavaScript"]),
            ..Default::default()
        };

        let summary = generator().generate(&record);
        assert_eq!(
            summary,
            "Aspiring Web Developer with a passion for HTML and CSS. Proficient in HTML, CSS, JavaScript."
        );
    }

    #[test]
    fn test_truncation_backtracks_to_period() {
        let g = generator();
        let sentence = "This sentence is exactly fifty characters long ok.";
        assert_eq!(sentence.len(), 50);
        let long = sentence.repeat(12);

        let truncated = g.truncate(&long);
        assert_eq!(truncated.len(), 500);
        assert!(truncated.ends_with("ok."));
    }

    #[test]
    fn test_truncation_appends_period_without_boundary() {
        let g = generator();
        let long = "word ".repeat(150);

        let truncated = g.truncate(&long);
        assert_eq!(truncated, format!("{}.", "word ".repeat(100).trim()));
    }

    #[test]
    fn test_truncation_ignores_early_periods() {
        let g = generator();
        let long = format!("Intro. {}", "x".repeat(600));

        let truncated = g.truncate(&long);
        assert_eq!(truncated.chars().count(), 501);
        assert!(truncated.ends_with("x."));
    }
}
