//! The resume document itself. Content is fixed; the app styles, scales,
//! selects, counts, and exports it, but never edits it.

use super::selection::SectionId;

pub struct Experience {
    pub id: SectionId,
    pub company: &'static str,
    pub title: &'static str,
    pub period: &'static str,
    pub bullets: &'static [&'static str],
}

pub struct Education {
    pub id: SectionId,
    pub school: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
    pub note: &'static str,
}

pub struct Resume {
    pub name: &'static str,
    pub role: &'static str,
    pub contact: &'static [&'static str],
    pub summary_id: SectionId,
    pub summary: &'static str,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: &'static [&'static str],
}

impl Resume {
    pub fn shiwen_jiang() -> Self {
        Resume {
            name: "Shiwen Jiang",
            role: "Software Engineer",
            contact: &[
                "Vancouver, BC",
                "hello@shiwenjiang.dev",
                "github.com/shiwenj",
                "(604) 555-0173",
            ],
            summary_id: SectionId("summary"),
            summary: "Software engineer with five years of experience building\n\
                      distributed data services and developer tooling. Comfortable\n\
                      owning systems from design through operation, with a bias\n\
                      toward small, observable, well-tested components.",
            experience: vec![
                Experience {
                    id: SectionId("experience-aurora"),
                    company: "Aurora Compute",
                    title: "Senior Software Engineer",
                    period: "2022 - Present",
                    bullets: &[
                        "Led the rebuild of the job scheduler powering 40k daily batch runs.",
                        "Cut p99 queue latency 6x by moving dispatch onto a sharded log.",
                        "Mentored four engineers through their first production launches.",
                    ],
                },
                Experience {
                    id: SectionId("experience-tidepool"),
                    company: "Tidepool Analytics",
                    title: "Software Engineer",
                    period: "2020 - 2022",
                    bullets: &[
                        "Built the ingestion pipeline for 2B events/day across 3 regions.",
                        "Designed the columnar cache that halved dashboard load times.",
                        "Introduced contract tests that caught 30+ schema breaks pre-deploy.",
                    ],
                },
                Experience {
                    id: SectionId("experience-coastline"),
                    company: "Coastline Labs",
                    title: "Software Engineer Intern",
                    period: "Summer 2019",
                    bullets: &[
                        "Shipped the internal feature-flag dashboard used by 12 teams.",
                        "Automated the release-notes pipeline, saving a day per release.",
                    ],
                },
            ],
            education: vec![
                Education {
                    id: SectionId("education-ubc"),
                    school: "University of British Columbia",
                    degree: "BSc, Computer Science",
                    period: "2016 - 2020",
                    note: "Graduated with distinction. TA for the operating systems course.",
                },
                Education {
                    id: SectionId("education-mooc"),
                    school: "MIT OpenCourseWare",
                    degree: "Distributed Systems (6.824), self-paced",
                    period: "2021",
                    note: "Completed all labs, including the replicated key/value store.",
                },
            ],
            skills: &[
                "Rust",
                "Go",
                "Python",
                "PostgreSQL",
                "Kafka",
                "Kubernetes",
                "Terraform",
                "gRPC",
            ],
        }
    }

    /// Every interactive block id, in paper order.
    pub fn section_ids(&self) -> Vec<SectionId> {
        let mut ids = vec![self.summary_id];
        ids.extend(self.experience.iter().map(|e| e.id));
        ids.extend(self.education.iter().map(|e| e.id));
        ids
    }

    /// Human title for a block id, used in the selection notification.
    pub fn section_title(&self, id: SectionId) -> Option<&'static str> {
        if id == self.summary_id {
            return Some("Summary");
        }
        if let Some(e) = self.experience.iter().find(|e| e.id == id) {
            return Some(e.company);
        }
        if let Some(e) = self.education.iter().find(|e| e.id == id) {
            return Some(e.school);
        }
        None
    }

    /// The paper's full rendered text, as the word counter sees it.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        let mut push_line = |line: &str| {
            text.push_str(line);
            text.push('\n');
        };

        push_line(self.name);
        push_line(self.role);
        push_line("CONTACT");
        for line in self.contact {
            push_line(line);
        }
        push_line("SUMMARY");
        push_line(self.summary);
        push_line("EXPERIENCE");
        for item in &self.experience {
            push_line(item.company);
            push_line(item.title);
            push_line(item.period);
            for bullet in item.bullets {
                push_line(bullet);
            }
        }
        push_line("EDUCATION");
        for item in &self.education {
            push_line(item.school);
            push_line(item.degree);
            push_line(item.period);
            push_line(item.note);
        }
        push_line("SKILLS");
        for skill in self.skills {
            push_line(skill);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_are_unique_and_ordered() {
        let resume = Resume::shiwen_jiang();
        let ids = resume.section_ids();
        assert_eq!(ids[0], resume.summary_id);
        assert_eq!(ids.len(), 1 + resume.experience.len() + resume.education.len());

        let mut seen = std::collections::HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "duplicate section id: {}", id);
        }
    }

    #[test]
    fn test_section_title_lookup() {
        let resume = Resume::shiwen_jiang();
        assert_eq!(resume.section_title(resume.summary_id), Some("Summary"));
        assert_eq!(
            resume.section_title(SectionId("experience-aurora")),
            Some("Aurora Compute")
        );
        assert_eq!(resume.section_title(SectionId("nope")), None);
    }

    #[test]
    fn test_plain_text_covers_every_block() {
        let resume = Resume::shiwen_jiang();
        let text = resume.plain_text();
        assert!(text.contains(resume.name));
        assert!(text.contains("EXPERIENCE"));
        assert!(text.contains("Tidepool Analytics"));
        assert!(text.contains("University of British Columbia"));
        assert!(text.contains("Kubernetes"));
    }

    #[test]
    fn test_plain_text_word_count_is_stable() {
        let resume = Resume::shiwen_jiang();
        let count = crate::app::wordcount::count_words(&resume.plain_text());
        // The document is fixed, so the counter's input never changes.
        assert_eq!(count, crate::app::wordcount::count_words(&resume.plain_text()));
        assert!(count > 100);
    }
}
