//! The portfolio content. Edit here, rebuild, done.

use super::{
    Certificate, Competency, EducationEntry, ExperienceEntry, Profile, Project, SkillCategory,
    SocialLink,
};

pub const PROFILE: Profile = Profile {
    name: "Ari R",
    headline: "Certified Data Scientist",
    tagline: "Hi, I'm Ari R, a passionate and certified Data Scientist skilled in Python, \
              Machine Learning, and Data Analysis. I enjoy transforming data into actionable \
              insights and building intelligent solutions. Currently exploring opportunities \
              to apply AI in real-world scenarios.",
    about_title: "Data Scientist & Analytics Expert",
    summary: &[
        "As a Junior Data Scientist and Analytics Expert, I bring a strong foundation in data \
         science, statistical analysis, and business intelligence. With a background in Python, \
         SQL, and data visualization tools like Tableau and Power BI, I have successfully turned \
         raw data into meaningful insights. My academic and project experience includes working \
         with supervised and unsupervised machine learning models, A/B testing, and \
         hypothesis-driven analysis to support data-informed decisions.",
        "I specialize in data cleaning, feature engineering, and building predictive models to \
         uncover patterns and trends. My ability to interpret complex datasets and communicate \
         insights clearly helps bridge the gap between technical analysis and strategic \
         decision-making. Additionally, I am familiar with tools such as Excel, Pandas, \
         Scikit-learn, and Jupyter Notebooks, and have experience working with relational \
         databases and large datasets in real-world scenarios.",
        "Driven by curiosity and continuous learning, I stay up-to-date with the latest \
         developments in AI, analytics, and cloud platforms like AWS and Google BigQuery. I \
         thrive in collaborative environments where data is used to solve business challenges \
         and enhance performance. With a keen eye for detail and a passion for solving problems, \
         I am eager to contribute to impactful data science and analytics initiatives.",
    ],
    core_skills: &[
        "Python",
        "SQL",
        "Machine Learning",
        "Statistical Analysis",
        "Data Visualization",
        "Deep Learning",
        "Big Data",
        "Cloud Computing",
        "Data Cleaning & Preprocessing",
        "Exploratory Data Analysis (EDA)",
        "Predictive Modeling",
        "Tableau / Power BI",
        "Scikit-learn / TensorFlow / Keras",
        "Pandas / NumPy",
        "Git & Version Control",
        "Communication & Storytelling with Data",
        "Problem Solving",
        "Business Intelligence",
    ],
    email: "ariranalyst@gmail.com",
    location: "Available for Remote Work",
};

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        degree: "BE - ECE",
        school: "Selvam College Of Technology",
        grade: "CGPA - 8.09",
        period: "2017 – 2021",
        location: "Namakkal, India",
        level: "Undergraduate",
    },
    EducationEntry {
        degree: "HSC (12th)",
        school: "Government Boys Higher Secondary School",
        grade: "1122/1200",
        period: "2016 – 2017",
        location: "Erode, India",
        level: "Higher Secondary",
    },
    EducationEntry {
        degree: "SSLC (10th)",
        school: "Government Boys Higher Secondary School",
        grade: "451/500",
        period: "2014 – 2015",
        location: "Erode, India",
        level: "Secondary",
    },
];

pub const EXPERIENCE: ExperienceEntry = ExperienceEntry {
    role: "Software Engineer",
    company: "Genxlead Solutions Pvt Ltd",
    tenure: "2.5 Years Experience",
    period: "Apr 2022 – Oct 2024",
    location: "Chennai, India",
    responsibilities: &[
        "Gained hands-on experience working with data analysis, problem-solving, email \
         marketing and implementing data-driven solutions",
        "Contributed to projects that enhanced business operations by identifying key insights, \
         improving efficiency, and supporting decision-making processes",
        "Worked closely with cross-functional teams to deliver high-quality results and \
         continuously improve workflows",
        "Designed, implemented and optimized email marketing campaigns targeting different \
         customer segments",
    ],
    achievements: &[
        "30% increase in email open rates",
        "25% boost in click-through rates (CTR)",
        "20% increase in conversion rates",
    ],
};

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Programming & Scripting",
        skills: &[
            "Python (Pandas, NumPy, NLTK, Scikit-learn)",
            "SQL (data querying and joins)",
            "Regular Expressions (Regex)",
            "Bash (basic)",
        ],
    },
    SkillCategory {
        title: "Data Handling & Analysis",
        skills: &[
            "Pandas",
            "NumPy",
            "Data Cleaning & Wrangling",
            "Exploratory Data Analysis (EDA)",
            "Data preprocessing & cleaning",
            "Feature Engineering",
        ],
    },
    SkillCategory {
        title: "Data Visualization",
        skills: &[
            "Matplotlib, Seaborn for visualization",
            "Excel (formulas, pivot tables, charts)",
            "Tableau / Power BI",
            "Plotly",
        ],
    },
    SkillCategory {
        title: "Machine Learning & AI",
        skills: &[
            "Supervised Learning: Linear Regression, Logistic Regression, etc..",
            "Unsupervised Learning: K-Means, Hierarchical Clustering, etc..",
            "Model Evaluation: Accuracy, Confusion Matrix, F1 Score",
            "Scikit-learn pipeline design",
            "TensorFlow / Keras (basic)",
        ],
    },
    SkillCategory {
        title: "Natural Language Processing",
        skills: &[
            "Text preprocessing (tokenization, stopword removal, stemming)",
            "Sentiment analysis using NLTK",
            "Feature extraction (Bag-of-Words, TF-IDF)",
            "Readability scoring (e.g., FOG Index)",
        ],
    },
    SkillCategory {
        title: "Web Scraping & Data Extraction",
        skills: &[
            "Web scraping using BeautifulSoup and Requests",
            "Data Extraction from various sources",
            "API Integration",
            "Automated data collection",
        ],
    },
    SkillCategory {
        title: "Tools & Platforms",
        skills: &[
            "Jupyter Notebook / Google Colab",
            "Git & GitHub",
            "Excel (Advanced Functions & Pivot Tables)",
            "VS Code / PyCharm",
        ],
    },
    SkillCategory {
        title: "Databases",
        skills: &["MySQL", "PostgreSQL", "SQLite", "MongoDB (basic)"],
    },
    SkillCategory {
        title: "Cloud & Big Data",
        skills: &[
            "AWS (S3, Lambda)",
            "Google Cloud Platform (BigQuery)",
            "Apache Spark (Intro-level)",
            "Flask deployment",
        ],
    },
];

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        title: "Certified Data Scientist",
        issuer: "Data Mites",
        description: "Comprehensive certification covering statistical analysis, machine \
                      learning, and data visualization",
        category: "Data Science",
    },
    Certificate {
        title: "Python for Data Science Development",
        issuer: "IBM",
        description: "Advanced Python programming for data science applications and analytics",
        category: "Programming",
    },
    Certificate {
        title: "Python for Machine Learning",
        issuer: "Great Learning",
        description: "Machine learning algorithms implementation and model development using \
                      Python",
        category: "Machine Learning",
    },
    Certificate {
        title: "Advanced Google Analytics",
        issuer: "Google",
        description: "Advanced web analytics, data analysis, and digital marketing insights",
        category: "Analytics",
    },
];

pub const COMPETENCIES: &[Competency] = &[
    Competency {
        title: "Leadership",
        description: "Leading teams and projects with vision and strategy",
    },
    Competency {
        title: "Smart Worker",
        description: "Efficient problem-solving with innovative approaches",
    },
    Competency {
        title: "Good Team Player",
        description: "Collaborative mindset and effective teamwork",
    },
    Competency {
        title: "Time Management",
        description: "Prioritizing tasks and meeting deadlines efficiently",
    },
    Competency {
        title: "Problem Solver",
        description: "Analytical approach to identifying and resolving issues",
    },
    Competency {
        title: "Quick Learner",
        description: "Rapidly adapting to new technologies and concepts",
    },
    Competency {
        title: "Decision-Making",
        description: "Data-driven decisions with strategic thinking",
    },
    Competency {
        title: "Analytic Reasoning",
        description: "Logical analysis and pattern recognition",
    },
    Competency {
        title: "Team Leadership",
        description: "Mentoring and guiding team members effectively",
    },
    Competency {
        title: "Critical Thinking",
        description: "Evaluating information objectively and systematically",
    },
    Competency {
        title: "Communication",
        description: "Clear and effective written and verbal communication",
    },
    Competency {
        title: "Project Management",
        description: "Planning, executing, and delivering projects successfully",
    },
    Competency {
        title: "Statistical Analysis",
        description: "Advanced statistical methods and data interpretation",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Currency Converter Web App",
        description: "Built a responsive currency converter web application using Flask \
                      framework. Features real-time exchange rates, historical data \
                      visualization, and support for multiple currencies with an intuitive \
                      user interface.",
        technologies: &[
            "Python",
            "Flask",
            "HTML/CSS",
            "JavaScript",
            "API Integration",
            "Bootstrap",
        ],
        repository: "https://github.com/ari-r-1/currency-converter-flask-based",
        category: "Web Development",
    },
    Project {
        title: "Email Duplicate Cleaner Web App",
        description: "Developed a web application to identify and remove duplicate emails from \
                      large datasets. Implemented advanced algorithms for email similarity \
                      detection and provided batch processing capabilities.",
        technologies: &[
            "Python",
            "Flask",
            "Pandas",
            "HTML/CSS",
            "JavaScript",
            "Data Processing",
        ],
        repository: "https://github.com/ari-r-1/email-duplicate-cleaner",
        category: "Data Processing",
    },
    Project {
        title: "Chronic Kidney Disease Prediction (CKDP)",
        description: "End-to-End Machine Learning project for predicting chronic kidney disease \
                      using patient medical data. Implemented multiple ML algorithms with \
                      comprehensive evaluation metrics and model interpretability.",
        technologies: &[
            "Python",
            "Scikit-learn",
            "Pandas",
            "NumPy",
            "Matplotlib",
            "Seaborn",
            "Jupyter",
        ],
        repository: "https://github.com/ari-r-1/ckd-prediction",
        category: "Healthcare ML",
    },
    Project {
        title: "Data Extraction And NLP Text Analysis",
        description: "Comprehensive NLP project for extracting insights from text data using \
                      natural language processing techniques. Features sentiment analysis, \
                      topic modeling, and text classification with visualization dashboards.",
        technologies: &[
            "Python",
            "NLTK",
            "SpaCy",
            "Scikit-learn",
            "Matplotlib",
            "Text Processing",
            "NLP",
        ],
        repository: "https://github.com/ari-r-1/data-extraction-and-NLP-text-analysis-",
        category: "Natural Language Processing",
    },
];

pub const GITHUB_URL: &str = "https://github.com/ari-r-1";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/r-ari/";

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        url: GITHUB_URL,
    },
    SocialLink {
        name: "LinkedIn",
        url: LINKEDIN_URL,
    },
    SocialLink {
        name: "Email",
        url: "mailto:ariranalyst@gmail.com",
    },
];

pub const ABOUT_LEAD: &str =
    "Passionate about turning data into meaningful insights and actionable strategies";
pub const EDUCATION_LEAD: &str =
    "My academic journey and educational background in engineering and data science";
pub const EXPERIENCE_LEAD: &str =
    "My professional journey in software engineering and data-driven solutions";
pub const SKILLS_LEAD: &str =
    "Comprehensive technical expertise across data science, machine learning, and software \
     development domains with hands-on project experience.";
pub const CERTIFICATES_LEAD: &str =
    "Professional certifications and achievements in data science, machine learning, and \
     analytics";
pub const COMPETENCIES_LEAD: &str =
    "Essential soft skills and leadership qualities that drive success in data science and \
     technology";
pub const PROJECTS_LEAD: &str =
    "A showcase of my data science and web development projects demonstrating end-to-end \
     solutions across various domains including healthcare, NLP, and data processing.";
pub const CONTACT_LEAD: &str =
    "I'm always excited to discuss new opportunities, collaborate on projects, or simply \
     connect with fellow data enthusiasts. Let's build something amazing together!";
pub const FOOTER_BLURB: &str =
    "Certified Data Scientist passionate about transforming data into actionable insights and \
     building intelligent solutions for real-world problems.";
pub const AVAILABILITY_NOTE: &str = "Typically responds within 24 hours";
