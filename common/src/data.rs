//! Static seed data
//!
//! The entire site content is hard-coded here and built once at startup.
//! Nothing in this module is loaded from a file or the network.

use crate::catalog::Catalog;
use crate::types::{
    CourseItem, ExperienceItem, Highlight, Profile, ProjectRecord, SkillGroup, SkillItem,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Site owner profile.
pub fn profile() -> Profile {
    Profile {
        name: "Yash Pandey".to_string(),
        role: "Data Scientist & AI Engineer".to_string(),
        tagline: "Passionate about developing analytical solutions and deploying AI-driven \
                  models. Specializing in Machine Learning, Computer Vision, and Natural \
                  Language Processing."
            .to_string(),
        journey: strings(&[
            "I transform complex AI concepts into impactful, real-world solutions. With a \
             strong foundation in Machine Learning, NLP, and Computer Vision, I build \
             intelligent systems that drive innovation, whether it's AI-powered \
             recommendation engines, emotion recognition platforms, or scalable computer \
             vision pipelines.",
            "My experience spans deploying end-to-end ML workflows, contributing to \
             real-world projects during internships, and mentoring peers in AI. I believe \
             in crafting ethical, explainable, and scalable AI that elevates user \
             experience and delivers measurable impact.",
        ]),
        email: "yashpandey240909@gmail.com".to_string(),
        phone: "+91 8890241760".to_string(),
        location: "Vadodara, Gujarat".to_string(),
        github_url: "https://github.com/yashpandey2409".to_string(),
        linkedin_url: "https://linkedin.com/in/yash-pandey2409".to_string(),
        resume_url: "/YashPandey_MachineLearningDeveloper.pdf".to_string(),
        portrait_url: "/YashPandey.jpg".to_string(),
    }
}

/// The fixed project catalog backing the gallery.
pub fn seed_catalog() -> Catalog {
    Catalog::new(vec![
        ProjectRecord {
            id: 1,
            title: "Music Recommendation Algorithm".to_string(),
            description: "A personalized music recommendation system using the Spotify API. \
                          The algorithm analyzes user preferences and listening history to \
                          suggest relevant songs."
                .to_string(),
            image: "https://images.pexels.com/photos/2426085/pexels-photo-2426085.jpeg"
                .to_string(),
            icon: "🎵".to_string(),
            tags: strings(&[
                "Python",
                "Scikit-learn",
                "Matplotlib",
                "Spotify API",
                "Machine Learning",
            ]),
            categories: strings(&["Machine Learning", "Data Science"]),
            live_url: "https://project-demo.com".to_string(),
            code_url: "https://github.com/yashpandey2409/music-recommendation".to_string(),
            details: strings(&[
                "Implemented collaborative filtering algorithm",
                "Integrated with Spotify API for real-time data",
                "Visualized song similarities using Matplotlib",
                "Achieved 85% recommendation accuracy",
            ]),
        },
        ProjectRecord {
            id: 2,
            title: "Emotion Detection in Text".to_string(),
            description: "An NLP-based emotion analysis system that detects and classifies \
                          emotions in text. Useful for sentiment analysis, customer feedback, \
                          and social media monitoring."
                .to_string(),
            image: "https://images.pexels.com/photos/3756679/pexels-photo-3756679.jpeg"
                .to_string(),
            icon: "🧠".to_string(),
            tags: strings(&[
                "NLP",
                "Python",
                "Deep Learning",
                "Transformers",
                "Sentiment Analysis",
            ]),
            categories: strings(&["NLP", "Machine Learning"]),
            live_url: "https://emotion-detection-demo.com".to_string(),
            code_url: "https://github.com/yashpandey2409/emotion-detection".to_string(),
            details: strings(&[
                "Used BERT for text classification",
                "Trained on diverse emotional datasets",
                "Real-time emotion analysis API",
                "Multi-language support",
            ]),
        },
        ProjectRecord {
            id: 3,
            title: "River Garbage Detection Robot".to_string(),
            description: "A computer vision system for detecting garbage in rivers using deep \
                          learning. The system helps automate the process of river cleaning by \
                          identifying and locating debris."
                .to_string(),
            image: "https://images.pexels.com/photos/1108572/pexels-photo-1108572.jpeg"
                .to_string(),
            icon: "🤖".to_string(),
            tags: strings(&[
                "Computer Vision",
                "Deep Learning",
                "Python",
                "YOLOv5",
                "OpenCV",
            ]),
            categories: strings(&["Computer Vision", "Machine Learning"]),
            live_url: "https://garbage-detection-demo.com".to_string(),
            code_url: "https://github.com/yashpandey2409/river-garbage-detection".to_string(),
            details: strings(&[
                "Custom-trained YOLOv5 model",
                "Real-time object detection",
                "Integration with robotics system",
                "95% detection accuracy",
            ]),
        },
    ])
}

/// Timeline entries, most recent first.
pub fn experience_entries() -> Vec<ExperienceItem> {
    vec![
        ExperienceItem {
            id: 1,
            role: "Artificial Neural Networks Intern".to_string(),
            company: "Coding Junior".to_string(),
            location: "Remote".to_string(),
            period: "April 2025 - Present".to_string(),
            description: strings(&[
                "Gained hands-on experience in designing, training, and evaluating artificial neural networks",
                "Implemented various neural network architectures using Python and TensorFlow/PyTorch",
                "Worked on real-world applications of deep learning",
                "Collaborated with team members on model optimization and deployment",
            ]),
            skills: strings(&[
                "Neural Networks",
                "Deep Learning",
                "Python",
                "TensorFlow",
                "PyTorch",
            ]),
        },
        ExperienceItem {
            id: 2,
            role: "Computer Vision Intern".to_string(),
            company: "Protosight".to_string(),
            location: "Remote".to_string(),
            period: "Dec 2023 - Mar 2024".to_string(),
            description: strings(&[
                "Worked on computer vision projects and model performance improvement",
                "Contributed to image and video processing applications",
                "Gained hands-on experience with ML, NLP, and deep learning",
                "Collaborated with team on model deployment and optimization",
            ]),
            skills: strings(&[
                "Computer Vision",
                "Machine Learning",
                "NLP",
                "Deep Learning",
                "Python",
            ]),
        },
        ExperienceItem {
            id: 3,
            role: "Subject Matter Expert".to_string(),
            company: "Chegg India".to_string(),
            location: "Remote".to_string(),
            period: "Nov 2022 - Jan 2023".to_string(),
            description: strings(&[
                "Solved over 500 questions in Computer Science, Python, MATLAB, and Computer Vision",
                "Provided detailed educational support and explanations",
                "Maintained high accuracy and quality standards",
                "Helped students understand complex technical concepts",
            ]),
            skills: strings(&[
                "Python",
                "MATLAB",
                "Computer Vision",
                "Mathematics",
                "Problem Solving",
            ]),
        },
    ]
}

/// Skill badges for the grid, grouped via `SkillGroup`.
pub fn skill_entries() -> Vec<SkillItem> {
    fn skill(name: &str, group: SkillGroup, icon: &str) -> SkillItem {
        SkillItem {
            name: name.to_string(),
            group,
            icon: icon.to_string(),
        }
    }

    vec![
        skill("Product Development", SkillGroup::Technical, "⚙️"),
        skill("Data Science", SkillGroup::Technical, "📊"),
        skill("Machine Learning", SkillGroup::Technical, "🧠"),
        skill("Generative AI", SkillGroup::Technical, "🤖"),
        skill("System Design", SkillGroup::Technical, "💻"),
        skill("OOP", SkillGroup::Technical, "⌨️"),
        skill("Computer Vision", SkillGroup::Domain, "👁️"),
        skill("Natural Language Processing", SkillGroup::Domain, "💬"),
        skill("Speech Processing", SkillGroup::Domain, "🎙️"),
        skill("Robotics", SkillGroup::Domain, "🦾"),
        skill("TensorFlow", SkillGroup::Tools, "🧠"),
        skill("PyTorch", SkillGroup::Tools, "🔥"),
        skill("Docker", SkillGroup::Tools, "🐳"),
        skill("Git", SkillGroup::Tools, "🌿"),
        skill("AWS", SkillGroup::Tools, "☁️"),
        skill("GCP", SkillGroup::Tools, "☁️"),
        skill("Django", SkillGroup::Tools, "🌐"),
        skill("Flask", SkillGroup::Tools, "🧪"),
        skill("MongoDB", SkillGroup::Tools, "🍃"),
    ]
}

/// Certification cards.
pub fn course_entries() -> Vec<CourseItem> {
    vec![
        CourseItem {
            id: 1,
            title: "Machine Learning Specialization".to_string(),
            provider: "Coursera (Andrew Ng)".to_string(),
            date: "January 2024".to_string(),
            certificate_url:
                "https://www.coursera.org/account/accomplishments/specialization/certificate/GQDA"
                    .to_string(),
            description: "A deep dive into supervised and unsupervised learning, with practical \
                          applications using Python. Covered topics include linear regression, \
                          logistic regression, neural networks, and ML pipelines."
                .to_string(),
            skills: strings(&[
                "Supervised Learning",
                "Neural Networks",
                "Logistic Regression",
                "ML Pipelines",
            ]),
        },
        CourseItem {
            id: 2,
            title: "Automating Real-World Tasks with Python".to_string(),
            provider: "Google (Coursera)".to_string(),
            date: "October 2023".to_string(),
            certificate_url:
                "https://www.coursera.org/account/accomplishments/certificate/BGHIRG7E7XZU"
                    .to_string(),
            description: "Practical course focused on using Python to automate common system \
                          administration tasks. Topics include file manipulation, web scraping, \
                          CSV automation, and working with APIs."
                .to_string(),
            skills: strings(&[
                "Python Automation",
                "Web Scraping",
                "CSV & JSON Handling",
                "APIs",
            ]),
        },
    ]
}

/// Highlight cards for the about section.
pub fn about_highlights() -> Vec<Highlight> {
    fn highlight(title: &str, blurb: &str, icon: &str) -> Highlight {
        Highlight {
            title: title.to_string(),
            blurb: blurb.to_string(),
            icon: icon.to_string(),
        }
    }

    vec![
        highlight(
            "AI Enthusiast",
            "Passionate about developing innovative AI solutions and models.",
            "🧠",
        ),
        highlight(
            "ML Developer",
            "Experienced in machine learning, deep learning, and computer vision.",
            "🤖",
        ),
        highlight(
            "Data Scientist",
            "Skilled in data analysis, visualization, and predictive modeling.",
            "📊",
        ),
        highlight(
            "Cloud Native",
            "Proficient in deploying AI models on cloud platforms.",
            "☁️",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_ids_unique() {
        let catalog = seed_catalog();
        let mut ids: Vec<u32> = catalog.projects().iter().map(|p| p.id).collect();
        let len = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), len);
    }

    #[test]
    fn test_seed_catalog_categories_non_empty() {
        let catalog = seed_catalog();
        assert!(!catalog.projects().is_empty());
        for project in catalog.projects() {
            assert!(
                !project.categories.is_empty(),
                "project {} has no categories",
                project.id
            );
        }
    }

    #[test]
    fn test_seed_categories_cover_known_set() {
        let categories = seed_catalog().categories();
        for expected in [
            "All",
            "Machine Learning",
            "Data Science",
            "NLP",
            "Computer Vision",
        ] {
            assert!(
                categories.iter().any(|c| c == expected),
                "missing category {}",
                expected
            );
        }
    }

    #[test]
    fn test_skill_entries_cover_every_group() {
        let skills = skill_entries();
        for group in [SkillGroup::Technical, SkillGroup::Domain, SkillGroup::Tools] {
            assert!(skills.iter().any(|s| s.group == group));
        }
    }

    #[test]
    fn test_experience_entries_have_content() {
        for entry in experience_entries() {
            assert!(!entry.role.is_empty());
            assert!(!entry.description.is_empty());
            assert!(!entry.skills.is_empty());
        }
    }
}
