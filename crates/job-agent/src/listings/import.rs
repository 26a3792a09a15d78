use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::domain::{JobId, JobListing};

const SKILL_SEPARATOR: char = ';';

pub(crate) fn parse_listings<R: Read>(reader: R) -> Result<Vec<JobListing>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut listings = Vec::new();

    for record in csv_reader.deserialize::<ListingRow>() {
        listings.push(record?.into_listing());
    }

    Ok(listings)
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    id: String,
    title: String,
    company: String,
    location: String,
    #[serde(rename = "type")]
    job_type: String,
    #[serde(default)]
    salary: String,
    #[serde(default)]
    experience: String,
    #[serde(default)]
    skills: String,
    match_score: u8,
    #[serde(default)]
    posted_date: String,
    #[serde(default)]
    description: String,
    #[serde(default, deserialize_with = "flexible_bool")]
    is_remote: bool,
}

impl ListingRow {
    fn into_listing(self) -> JobListing {
        let skills = self
            .skills
            .split(SKILL_SEPARATOR)
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(str::to_string)
            .collect();

        JobListing {
            id: JobId(self.id),
            title: self.title,
            company: self.company,
            location: self.location,
            job_type: self.job_type,
            salary: self.salary,
            experience: self.experience,
            skills,
            match_score: self.match_score,
            posted_date: self.posted_date,
            description: self.description,
            is_remote: self.is_remote,
        }
    }
}

fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "no" | "n" | "0" => Ok(false),
        "true" | "yes" | "y" | "1" | "remote" => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "expected a yes/no value for is_remote, got '{other}'"
        ))),
    }
}
