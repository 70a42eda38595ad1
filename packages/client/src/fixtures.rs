//! Seed data for the offline store. Collections are materialized on first
//! read so the app has something to show when the backend has never been
//! reachable.

use chrono::{Duration, Utc};
use sewa_domain::{BlogPost, Group, Job, JobType, Ngo, NgoStatus};
use uuid::Uuid;

pub fn ngos() -> Vec<Ngo> {
    let mk = |name: &str, cause: &str, description: &str, image: u32, raised: i64, goal: i64| Ngo {
        id: Uuid::new_v4(),
        name: name.into(),
        cause: cause.into(),
        description: description.into(),
        image: Some(format!("https://picsum.photos/400/250?random={image}")),
        raised,
        goal,
        status: NgoStatus::Approved,
        date: Utc::now().format("%Y-%m-%d").to_string(),
    };
    vec![
        mk(
            "Future Scholars Foundation",
            "Education",
            "Providing textbooks, uniforms, and scholarships to underprivileged children in rural districts.",
            101,
            15_400,
            50_000,
        ),
        mk(
            "Green Earth Alliance",
            "Environment",
            "Planting 10,000 trees this monsoon season to combat urban heat islands.",
            102,
            8_200,
            10_000,
        ),
        mk(
            "Healing Hands Medical",
            "Health",
            "Free cataract surgeries and general health checkups for senior citizens.",
            103,
            45_000,
            60_000,
        ),
        mk(
            "Paws & Claws Shelter",
            "Animal Welfare",
            "Medical aid and food for stray animals injured in recent traffic accidents.",
            104,
            3_000,
            15_000,
        ),
        mk(
            "Rapid Response Relief",
            "Disaster Relief",
            "Emergency kits and temporary shelter for flood victims in the northern region.",
            105,
            89_000,
            100_000,
        ),
    ]
}

pub fn blogs() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: Uuid::new_v4(),
            title: "5 Ways to Live More Sustainably".into(),
            author: "Eco Warrior".into(),
            content: "Sustainable living is not just a trend; it is a necessity. Here are 5 simple changes you can make today: 1. Reduce plastic usage... 2. Compost organic waste...".into(),
            date: "2024-03-10".into(),
            likes: 124,
            category: "Sustainability".into(),
            image: Some("https://picsum.photos/800/400?random=301".into()),
        },
        BlogPost {
            id: Uuid::new_v4(),
            title: "My Experience Volunteering at the Animal Shelter".into(),
            author: "Jane Doe".into(),
            content: "Last weekend, I spent 5 hours at the Paws & Claws shelter. It was an eye-opening experience. The dedication of the staff is inspiring...".into(),
            date: "2024-03-05".into(),
            likes: 89,
            category: "Volunteering".into(),
            image: Some("https://picsum.photos/800/400?random=302".into()),
        },
    ]
}

pub fn groups() -> Vec<Group> {
    let mk = |name: &str, description: &str, members: u32, image: u32| Group {
        id: Uuid::new_v4(),
        name: name.into(),
        description: description.into(),
        members,
        image: Some(format!("https://picsum.photos/100/100?random={image}")),
    };
    vec![
        mk(
            "Civic Action Team",
            "Discussing local governance and cleanliness drives.",
            1250,
            401,
        ),
        mk(
            "Tech for Good",
            "Developers building tools for social impact.",
            890,
            402,
        ),
        mk(
            "Weekend Cleanups",
            "Coordinating spot-fixes every Saturday.",
            450,
            403,
        ),
    ]
}

pub fn jobs() -> Vec<Job> {
    vec![
        Job {
            id: Uuid::new_v4(),
            title: "Community Outreach Coordinator".into(),
            company: "Green Earth Alliance".into(),
            location: "Mumbai, India".into(),
            job_type: JobType::FullTime,
            salary_range: "₹30,000 - ₹45,000".into(),
            description: "We are looking for a passionate coordinator to manage our weekend plantation drives and community workshops.".into(),
            requirements: vec![
                "Excellent communication skills".into(),
                "Experience in event management".into(),
                "Passion for environment".into(),
            ],
            posted_by: "employer1".into(),
            posted_at: Utc::now(),
            applicants_count: 12,
        },
        Job {
            id: Uuid::new_v4(),
            title: "Volunteer Math Tutor".into(),
            company: "Future Scholars".into(),
            location: "Remote".into(),
            job_type: JobType::Volunteer,
            salary_range: "Unpaid".into(),
            description: "Teach basic mathematics to underprivileged children via Zoom on weekends.".into(),
            requirements: vec![
                "Strong Math background".into(),
                "Patience with children".into(),
                "Available on weekends".into(),
            ],
            posted_by: "employer2".into(),
            posted_at: Utc::now() - Duration::days(1),
            applicants_count: 5,
        },
        Job {
            id: Uuid::new_v4(),
            title: "Senior Care Assistant".into(),
            company: "Golden Years Home".into(),
            location: "Delhi, India".into(),
            job_type: JobType::PartTime,
            salary_range: "₹15,000 - ₹20,000".into(),
            description: "Assist senior citizens with daily activities and organize recreational sessions.".into(),
            requirements: vec![
                "Nursing background preferred".into(),
                "Empathetic nature".into(),
                "Basic first aid knowledge".into(),
            ],
            posted_by: "employer3".into(),
            posted_at: Utc::now() - Duration::days(2),
            applicants_count: 8,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_ngos_are_all_approved() {
        let seeded = ngos();
        assert_eq!(seeded.len(), 5);
        assert!(seeded.iter().all(|n| n.status == NgoStatus::Approved));
    }

    #[test]
    fn seeded_jobs_are_ordered_newest_first() {
        let seeded = jobs();
        assert!(seeded.windows(2).all(|w| w[0].posted_at >= w[1].posted_at));
    }
}
