use crate::content::gradient::GradientSpec;
use crate::content::model::{Achievement, FocusArea, HeroStat, Profile, Project, SkillCategory};

const GITHUB: &str = "https://github.com/JACELL100";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

pub(crate) fn profile() -> Profile {
    Profile {
        name: "Jacell Jamble".to_owned(),
        role: "Computer Engineering Student".to_owned(),
        location: "Mumbai, India".to_owned(),
        email: "jacelljamble@gmail.com".to_owned(),
        github: GITHUB.to_owned(),
        linkedin: "https://www.linkedin.com/in/jacell-jamble-8236ba286/".to_owned(),
    }
}

fn project(
    name: &str,
    description: &str,
    tech: &[&str],
    live: &str,
    featured: bool,
    gradient: GradientSpec,
) -> Project {
    Project {
        name: name.to_owned(),
        description: description.to_owned(),
        tech: strings(tech),
        github: GITHUB.to_owned(),
        live: live.to_owned(),
        featured,
        gradient,
        image: None,
    }
}

pub(crate) fn projects() -> Vec<Project> {
    vec![
        project(
            "HealthLock",
            "AI-Powered Healthcare Platform with encrypted health records, AI assessments, and virtual consultations. Built with modern security practices and real-time communication.",
            &["React", "Node.js", "MongoDB", "TensorFlow.js", "WebRTC"],
            "https://bharat-secure.vercel.app/",
            true,
            GradientSpec::three("purple-600", "violet-600", "indigo-600"),
        ),
        project(
            "BankFlow",
            "Financial SaaS platform with secure authentication, real-time transactions, and seamless bank integration for modern banking needs.",
            &["Next.js", "Django", "PostgreSQL"],
            "https://travel-safe-ai-jqdm.vercel.app/",
            true,
            GradientSpec::three("emerald-600", "teal-600", "cyan-600"),
        ),
        project(
            "WealthGrow",
            "Investment management platform for stocks, bonds, and cryptocurrencies with real-time data visualization and portfolio analytics.",
            &["React", "Django", "PostgreSQL"],
            "https://bright-builds.vercel.app/",
            false,
            GradientSpec::three("violet-600", "purple-600", "fuchsia-600"),
        ),
        project(
            "LatteHeaven",
            "Coffee shop-themed website - 2nd Runner-Up at GDSC UI/UX Competition 2024. Focus on user experience and modern design principles.",
            &["React", "Figma", "CSS"],
            "https://swaad-supplier.vercel.app/",
            false,
            GradientSpec::three("orange-500", "rose-500", "pink-600"),
        ),
    ]
}

fn achievement(title: &str, position: &str, organizer: &str, date: &str) -> Achievement {
    Achievement {
        title: title.to_owned(),
        position: position.to_owned(),
        organizer: organizer.to_owned(),
        date: date.to_owned(),
        link: None,
    }
}

pub(crate) fn achievements() -> Vec<Achievement> {
    vec![
        achievement("TECHMANIA'25", "Winner", "L.S. Raheja College", "2025"),
        achievement(
            "CODESTORM Hack 2025",
            "Winner - 2 Track Wins & 2 Extra Awards",
            "Florida International University",
            "2025",
        ),
        achievement(
            "Oscillation Hackathon",
            "Runner-Up",
            "Vasantdada Patil Pratishthan's College",
            "2024",
        ),
        achievement(
            "Saksham Ideathon'25",
            "2nd Runner-Up",
            "Rajiv Gandhi Institute of Technology",
            "2025",
        ),
        achievement(
            "GDSC UI/UX Competition'24",
            "2nd Runner-Up",
            "Google Developer Student Clubs",
            "2024",
        ),
        achievement("FullStack.AI Hackathon", "Winner", "CertifyO", "2024"),
        achievement(
            "TechFiesta International 2025",
            "Finalist",
            "International Hackathon",
            "2025",
        ),
        achievement("Changators-Ideate", "Runner-Up", "Hackathon", "2024"),
    ]
}

const SKILLS: &[(&str, &[&str])] = &[
    ("Frontend", &["HTML", "CSS", "JavaScript", "React", "Next.js", "TypeScript"]),
    ("Backend", &["Django", "Node.js", "Express", "REST APIs"]),
    ("Database", &["MongoDB", "PostgreSQL", "Redis"]),
    ("Design", &["Figma", "Canva", "Framer", "Adobe XD"]),
    ("Programming", &["C", "Python", "Solidity", "JavaScript"]),
    ("Web3", &["Solidity", "MetaMask", "Remix IDE", "Hardhat"]),
    ("DevOps", &["Git", "Docker", "Vercel", "AWS"]),
    ("Other", &["Video Editing", "Unreal Engine", "Arduino", "IoT"]),
];

pub(crate) fn skills() -> Vec<SkillCategory> {
    SKILLS
        .iter()
        .map(|(label, skills)| SkillCategory {
            label: (*label).to_owned(),
            skills: strings(skills),
        })
        .collect()
}

pub(crate) fn hero_stats() -> Vec<HeroStat> {
    [
        ("5+", "Hackathon Wins"),
        ("8.0", "CGPA"),
        ("15+", "Technologies"),
        ("4+", "Major Projects"),
    ]
    .into_iter()
    .map(|(value, label)| HeroStat {
        value: value.to_owned(),
        label: label.to_owned(),
    })
    .collect()
}

pub(crate) fn focus_areas() -> Vec<FocusArea> {
    [
        ("Web3 Development", 80),
        ("Full-Stack Development", 95),
        ("UI/UX Design", 75),
    ]
    .into_iter()
    .map(|(name, level)| FocusArea {
        name: name.to_owned(),
        level,
    })
    .collect()
}
