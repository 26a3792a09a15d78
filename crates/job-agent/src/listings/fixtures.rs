use super::domain::{JobId, JobListing};

/// The five-record catalog served when no external job source is configured.
pub fn mock_jobs() -> Vec<JobListing> {
    vec![
        listing(
            "1",
            "Senior Frontend Developer",
            "TechCorp Inc.",
            "San Francisco, CA",
            "$120k - $150k",
            "3-5 years",
            &["React", "TypeScript", "Node.js", "AWS"],
            95,
            "2 days ago",
            "We are looking for a Senior Frontend Developer to join our growing team...",
            true,
        ),
        listing(
            "2",
            "Full Stack Engineer",
            "StartupXYZ",
            "New York, NY",
            "$100k - $130k",
            "2-4 years",
            &["JavaScript", "Python", "React", "Django"],
            88,
            "1 day ago",
            "Join our fast-growing startup and help build the next big thing...",
            false,
        ),
        listing(
            "3",
            "DevOps Engineer",
            "CloudTech Solutions",
            "Austin, TX",
            "$110k - $140k",
            "4-6 years",
            &["Docker", "Kubernetes", "AWS", "Terraform"],
            82,
            "3 days ago",
            "We need a DevOps engineer to help us scale our infrastructure...",
            true,
        ),
        listing(
            "4",
            "Data Scientist",
            "DataCorp",
            "Seattle, WA",
            "$130k - $160k",
            "3-5 years",
            &["Python", "Machine Learning", "SQL", "TensorFlow"],
            78,
            "5 days ago",
            "Join our data science team and help drive insights...",
            false,
        ),
        listing(
            "5",
            "Product Manager",
            "ProductHub",
            "Boston, MA",
            "$140k - $170k",
            "5-7 years",
            &["Product Strategy", "User Research", "Agile", "Analytics"],
            75,
            "1 week ago",
            "Lead product development for our flagship platform...",
            true,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    salary: &str,
    experience: &str,
    skills: &[&str],
    match_score: u8,
    posted_date: &str,
    description: &str,
    is_remote: bool,
) -> JobListing {
    JobListing {
        id: JobId::new(id),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        job_type: "Full-time".to_string(),
        salary: salary.to_string(),
        experience: experience.to_string(),
        skills: skills.iter().map(|skill| skill.to_string()).collect(),
        match_score,
        posted_date: posted_date.to_string(),
        description: description.to_string(),
        is_remote,
    }
}
