//! Fixed question pools for interview plan generation.
//!
//! Pools are static text keyed by skill family; selection logic lives in the
//! recommender.

pub const PYTHON_QUESTIONS: &[&str] = &[
    "Can you explain the difference between a list and a tuple in Python?",
    "How would you handle memory management in a Python application?",
    "Describe your experience with Python frameworks like Django or Flask.",
    "How do you approach debugging complex Python applications?",
    "What's your experience with Python data science libraries like pandas and numpy?",
];

pub const JAVASCRIPT_QUESTIONS: &[&str] = &[
    "Explain the concept of closures in JavaScript.",
    "How do you handle asynchronous operations in JavaScript?",
    "What's the difference between var, let, and const?",
    "Describe your experience with modern JavaScript frameworks.",
    "How do you ensure code quality in JavaScript projects?",
];

pub const JAVA_QUESTIONS: &[&str] = &[
    "Explain the difference between abstract classes and interfaces in Java.",
    "How do you handle memory management in Java applications?",
    "Describe your experience with Spring framework.",
    "How do you approach multithreading in Java?",
    "What's your experience with Java testing frameworks?",
];

pub const WEB_DEVELOPMENT_QUESTIONS: &[&str] = &[
    "How do you ensure responsive design across different devices?",
    "Describe your experience with modern CSS frameworks.",
    "How do you optimize website performance?",
    "What's your approach to cross-browser compatibility?",
    "How do you handle state management in web applications?",
];

pub const DATABASE_QUESTIONS: &[&str] = &[
    "Explain the difference between SQL and NoSQL databases.",
    "How do you optimize database queries for performance?",
    "Describe your experience with database design and normalization.",
    "How do you handle database migrations?",
    "What's your approach to database security?",
];

pub const CLOUD_QUESTIONS: &[&str] = &[
    "Describe your experience with AWS services.",
    "How do you approach infrastructure as code?",
    "Explain your experience with containerization and orchestration.",
    "How do you ensure security in cloud environments?",
    "What's your experience with CI/CD pipelines?",
];

pub const BEHAVIORAL_QUESTIONS: &[&str] = &[
    "Tell me about a challenging project you worked on and how you overcame obstacles.",
    "Describe a situation where you had to learn a new technology quickly.",
    "How do you handle working with difficult team members?",
    "Tell me about a time when you had to make a difficult technical decision.",
    "How do you stay updated with the latest technology trends?",
    "Describe a situation where you had to mentor a junior developer.",
    "How do you handle tight deadlines and pressure?",
    "Tell me about a project where you had to collaborate with non-technical stakeholders.",
];

pub const PROBLEM_SOLVING_QUESTIONS: &[&str] = &[
    "How would you design a scalable web application architecture?",
    "Explain how you would implement a caching strategy for a high-traffic website.",
    "How would you approach debugging a production issue with limited information?",
    "Describe how you would design a database schema for a social media platform.",
    "How would you implement a real-time notification system?",
    "Explain your approach to API design and documentation.",
    "How would you handle data migration in a live system?",
    "Describe how you would implement a search functionality with filters.",
];

pub const PYTHON_FOLLOW_UP: &str =
    "Would you be interested in learning Python? What's your approach to learning new programming languages?";

pub const JAVASCRIPT_FOLLOW_UP: &str =
    "How do you feel about learning JavaScript? What's your experience with frontend development?";

pub const REACT_FOLLOW_UP: &str =
    "Are you familiar with modern frontend frameworks? How do you approach learning new technologies?";

pub const CLOUD_FOLLOW_UP: &str =
    "What's your experience with cloud platforms? How do you approach infrastructure management?";

pub const DOCKER_FOLLOW_UP: &str =
    "Are you familiar with containerization? How do you approach deployment and DevOps?";

pub const AGILE_FOLLOW_UP: &str =
    "What's your experience with agile methodologies? How do you handle project management?";

pub const LEADERSHIP_FOLLOW_UP: &str =
    "Describe your leadership experience. How do you motivate and guide team members?";

pub const COMMUNICATION_FOLLOW_UP: &str =
    "How do you communicate technical concepts to non-technical stakeholders?";
