//! Built-in demo data set.
//!
//! Seven profiles, four jobs, four feed posts and three nearby
//! professionals. Avatar and logo references point at stock photo URLs;
//! nothing in this workspace fetches them.

use crate::types::*;

const PHOTO_BASE: &str = "https://images.unsplash.com/photo-";
const PHOTO_QUERY: &str = "?ixlib=rb-1.2.1&auto=format&fit=crop&w=600&q=80";

fn photo(key: &str) -> String {
    format!("{PHOTO_BASE}{key}{PHOTO_QUERY}")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn profile(
    id: ProfileId,
    full_name: &str,
    title: &str,
    company: &str,
    location: &str,
    skills: &[&str],
    experience: u32,
    avatar: &str,
    bio: &str,
    mutual_connections: u32,
) -> Profile {
    Profile {
        id,
        full_name: full_name.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        skills: strings(skills),
        experience,
        avatar: photo(avatar),
        bio: bio.to_string(),
        mutual_connections,
    }
}

fn profiles() -> Vec<Profile> {
    vec![
        profile(
            1,
            "Sarah Johnson",
            "UX/UI Design Lead @ Envision Tech",
            "Envision Tech",
            "San Francisco",
            &["UX Design", "Figma", "Design Systems", "User Research"],
            8,
            "1573496359142-b8d87734a5a2",
            "Passionate UX/UI designer with 8+ years of experience crafting digital experiences that delight users.",
            2,
        ),
        profile(
            2,
            "James Wilson",
            "Product Manager @ TechFlow",
            "TechFlow",
            "Boston",
            &["Product Strategy", "Agile", "Data Analysis", "Leadership"],
            6,
            "1560250097-0b93528c311a",
            "Product leader focused on building innovative solutions that solve real user problems.",
            5,
        ),
        profile(
            3,
            "Emily Chen",
            "Frontend Developer @ InnovateTech",
            "InnovateTech",
            "New York",
            &["React", "TypeScript", "CSS", "Web Performance"],
            4,
            "1580489944761-15a19d654956",
            "Frontend developer specializing in building beautiful, accessible, and performant web applications.",
            3,
        ),
        profile(
            4,
            "Marcus Wong",
            "Data Scientist @ DataSync",
            "DataSync",
            "Seattle",
            &["Machine Learning", "Python", "Data Visualization", "Statistics"],
            5,
            "1552058544-f2b08422138a",
            "Data scientist using analytics and ML to help companies make better decisions.",
            1,
        ),
        profile(
            5,
            "Alicia Nguyen",
            "Product Designer @ DesignHub",
            "DesignHub",
            "San Francisco",
            &["UI/UX", "Figma", "Prototyping", "Design Thinking"],
            7,
            "1494790108377-be9c29b29330",
            "Product designer crafting thoughtful digital experiences with a focus on simplicity and usability.",
            4,
        ),
        profile(
            6,
            "Michael Richards",
            "Lead Developer @ CloudTech",
            "CloudTech",
            "San Francisco",
            &["JavaScript", "Cloud", "AWS", "DevOps"],
            9,
            "1500648767791-00dcc994a43e",
            "Full stack developer and cloud architect with expertise in scalable web applications.",
            3,
        ),
        profile(
            7,
            "Daniel Lee",
            "Marketing Manager @ Startup",
            "Startup",
            "San Francisco",
            &["Growth", "Digital", "SEO", "Content Strategy"],
            6,
            "1531427186611-ecfd6d936c79",
            "Marketing professional with a passion for growth strategies and digital innovation.",
            2,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn job(
    id: JobId,
    title: &str,
    company: &str,
    location: &str,
    is_remote: bool,
    skills: &[&str],
    salary: &str,
    logo: &str,
    posted_days_ago: u32,
    applicants: u32,
    description: &str,
) -> Job {
    Job {
        id,
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        is_remote,
        job_type: "Full-time".to_string(),
        description: description.to_string(),
        skills: strings(skills),
        salary: salary.to_string(),
        logo: photo(logo),
        posted_days_ago,
        applicants,
    }
}

fn jobs() -> Vec<Job> {
    vec![
        job(
            1,
            "Senior UX Designer",
            "TechVision Inc.",
            "San Francisco",
            true,
            &["UI/UX", "Figma", "Design Systems"],
            "$120K-$150K",
            "1611162617213-7d7a39e9b1d7",
            3,
            42,
            "Lead design initiatives for enterprise products with cross-functional teams.",
        ),
        job(
            2,
            "Full Stack Developer",
            "InnoTech Solutions",
            "New York",
            false,
            &["React", "Node.js", "AWS"],
            "$130K-$160K",
            "1560179707-f14e90ef3623",
            1,
            28,
            "Build scalable web applications and contribute to the technical architecture.",
        ),
        job(
            3,
            "Product Manager",
            "GrowthLabs",
            "Austin",
            true,
            &["Product Management", "B2B SaaS", "Agile"],
            "$110K-$140K",
            "1516321318423-f06f85e504b3",
            5,
            56,
            "Drive product strategy and execution for a B2B SaaS platform.",
        ),
        job(
            4,
            "Data Engineer",
            "AnalyticsPro",
            "Remote",
            true,
            &["Python", "SQL", "ETL", "Data Warehousing"],
            "$125K-$155K",
            "1489875347897-49f64b51c1f8",
            2,
            34,
            "Build and maintain data pipelines for an analytics platform.",
        ),
    ]
}

fn feed() -> Vec<FeedPost> {
    vec![
        FeedPost {
            id: 1,
            author_id: 3,
            content: "Just completed the Advanced React Patterns course! Excited to implement these new skills in our upcoming project redesign.".to_string(),
            hours_ago: 48,
            kind: PostKind::Achievement,
            metadata: Some(PostMetadata {
                title: Some("Advanced React Patterns".to_string()),
                level: Some(4),
                ..Default::default()
            }),
        },
        FeedPost {
            id: 2,
            author_id: 4,
            content: "Just published my research on \"Implementing ML Models for Financial Forecasting\". Check it out and let me know your thoughts!".to_string(),
            hours_ago: 4,
            kind: PostKind::Project,
            metadata: Some(PostMetadata {
                title: Some("ML Models for Financial Forecasting".to_string()),
                image_url: Some(photo("1551288049-bebda4e38f71")),
                category: Some("Research Paper".to_string()),
                ..Default::default()
            }),
        },
        FeedPost {
            id: 3,
            author_id: 1,
            content: "Excited to share that I'll be speaking at the upcoming UX Design Conference about building accessible design systems. Hope to see some of you there!".to_string(),
            hours_ago: 24,
            kind: PostKind::Post,
            metadata: None,
        },
        FeedPost {
            id: 4,
            author_id: 2,
            content: "Just earned my Product Management certification! Grateful for all the mentors and colleagues who supported me through this journey.".to_string(),
            hours_ago: 12,
            kind: PostKind::Achievement,
            metadata: Some(PostMetadata {
                title: Some("Product Management Certification".to_string()),
                level: Some(3),
                ..Default::default()
            }),
        },
    ]
}

fn nearby(profiles: &[Profile]) -> Vec<NearbyProfessional> {
    [(1, 6, "0.4 mi"), (2, 5, "1.2 mi"), (3, 7, "2.8 mi")]
        .into_iter()
        .filter_map(|(id, profile_id, distance)| {
            let p = profiles.iter().find(|p| p.id == profile_id)?;
            Some(NearbyProfessional {
                id,
                profile_id,
                name: p.full_name.clone(),
                title: p.title.clone(),
                company: p.company.clone(),
                skills: p.skills.iter().take(2).cloned().collect(),
                distance: distance.to_string(),
            })
        })
        .collect()
}

impl Catalog {
    /// The built-in demo catalog, in display order.
    pub fn seed() -> Self {
        let mut catalog = Catalog::new();
        let profiles = profiles();
        for professional in nearby(&profiles) {
            catalog.insert_nearby(professional);
        }
        for profile in profiles {
            catalog.insert_profile(profile);
        }
        for job in jobs() {
            catalog.insert_job(job);
        }
        for post in feed() {
            catalog.insert_post(post);
        }
        catalog
    }
}
