//! Built-in catalog data.

/// Catalog key → skills, in definition order.
pub const JOB_SKILLS: &[(&str, &[&str])] = &[
    (
        "software developer",
        &[
            "Python", "Java", "JavaScript", "SQL", "Git", "Data Structures",
            "Algorithms", "Object-Oriented Programming", "Unit Testing", "REST APIs",
            "Problem Solving", "Agile",
        ],
    ),
    (
        "software engineer",
        &[
            "Python", "Java", "C++", "System Design", "Data Structures", "Algorithms",
            "Git", "SQL", "Design Patterns", "Cloud Computing", "CI/CD", "Code Review",
        ],
    ),
    (
        "full stack developer",
        &[
            "JavaScript", "TypeScript", "React", "Node.js", "Express.js", "HTML", "CSS",
            "SQL", "MongoDB", "REST APIs", "Git", "Docker",
        ],
    ),
    (
        "frontend developer",
        &[
            "HTML", "CSS", "JavaScript", "TypeScript", "React", "Vue.js", "Angular",
            "Responsive Design", "Webpack", "Accessibility", "Git", "Browser DevTools",
        ],
    ),
    (
        "backend developer",
        &[
            "Python", "Java", "Node.js", "Go", "SQL", "PostgreSQL", "Redis",
            "REST APIs", "GraphQL", "Microservices", "Docker", "Authentication",
        ],
    ),
    (
        "mobile developer",
        &[
            "Swift", "Kotlin", "Flutter", "React Native", "iOS Development",
            "Android Development", "Mobile UI Design", "REST APIs", "Firebase", "Git",
            "App Store Deployment",
        ],
    ),
    (
        "data scientist",
        &[
            "Python", "R", "SQL", "Machine Learning", "Statistics", "Pandas", "NumPy",
            "Scikit-learn", "Data Visualization", "Deep Learning", "Jupyter",
            "Feature Engineering",
        ],
    ),
    (
        "data analyst",
        &[
            "SQL", "Excel", "Python", "Tableau", "Power BI", "Statistics",
            "Data Visualization", "Data Cleaning", "Pandas", "Reporting",
            "Critical Thinking",
        ],
    ),
    (
        "data engineer",
        &[
            "Python", "SQL", "Apache Spark", "Apache Kafka", "Airflow", "ETL",
            "Data Warehousing", "Snowflake", "AWS", "Hadoop", "Data Modeling", "Scala",
        ],
    ),
    (
        "machine learning engineer",
        &[
            "Python", "TensorFlow", "PyTorch", "Machine Learning", "Deep Learning",
            "MLOps", "Scikit-learn", "Docker", "Kubernetes", "Model Deployment",
            "Statistics", "Linear Algebra",
        ],
    ),
    (
        "ai engineer",
        &[
            "Python", "PyTorch", "TensorFlow", "Large Language Models",
            "Natural Language Processing", "Computer Vision", "Prompt Engineering",
            "Vector Databases", "MLOps", "Deep Learning", "APIs",
        ],
    ),
    (
        "devops engineer",
        &[
            "Linux", "Docker", "Kubernetes", "CI/CD", "Jenkins", "Terraform", "Ansible",
            "AWS", "Bash", "Monitoring", "Git", "Python",
        ],
    ),
    (
        "cloud engineer",
        &[
            "AWS", "Azure", "Google Cloud Platform", "Terraform", "Kubernetes",
            "Networking", "Linux", "Cloud Security", "Serverless", "Python",
            "Infrastructure as Code",
        ],
    ),
    (
        "system administrator",
        &[
            "Linux", "Windows Server", "Active Directory", "Bash", "PowerShell",
            "Networking", "Virtualization", "Backup and Recovery", "Monitoring",
            "Troubleshooting", "Security Patching",
        ],
    ),
    (
        "network engineer",
        &[
            "TCP/IP", "Routing", "Switching", "Cisco", "Firewalls", "VPN", "DNS",
            "DHCP", "Network Security", "Wireshark", "BGP", "Troubleshooting",
        ],
    ),
    (
        "database administrator",
        &[
            "SQL", "PostgreSQL", "MySQL", "Oracle", "Microsoft SQL Server",
            "Backup and Recovery", "Performance Tuning", "Replication",
            "Database Security", "Indexing", "High Availability",
        ],
    ),
    (
        "ui/ux designer",
        &[
            "Figma", "Adobe XD", "Sketch", "User Research", "Wireframing",
            "Prototyping", "Usability Testing", "Information Architecture",
            "Interaction Design", "Design Systems", "Accessibility",
        ],
    ),
    (
        "graphic designer",
        &[
            "Adobe Photoshop", "Adobe Illustrator", "Adobe InDesign", "Typography",
            "Color Theory", "Branding", "Layout Design", "Print Design", "Creativity",
            "Visual Communication",
        ],
    ),
    (
        "web designer",
        &[
            "HTML", "CSS", "Figma", "Responsive Design", "WordPress", "Adobe Photoshop",
            "Typography", "UI Design", "JavaScript", "SEO Basics",
        ],
    ),
    (
        "product manager",
        &[
            "Product Strategy", "Roadmapping", "User Research", "Agile", "Scrum",
            "Stakeholder Management", "Data Analysis", "A/B Testing", "Jira",
            "Prioritization", "Communication",
        ],
    ),
    (
        "project manager",
        &[
            "Project Planning", "Risk Management", "Budgeting", "Agile", "Scrum",
            "Waterfall", "Stakeholder Management", "Microsoft Project", "Jira",
            "Communication", "Leadership",
        ],
    ),
    (
        "scrum master",
        &[
            "Scrum", "Agile", "Kanban", "Facilitation", "Jira", "Coaching",
            "Sprint Planning", "Retrospectives", "Conflict Resolution", "Communication",
        ],
    ),
    (
        "quality assurance engineer",
        &[
            "Test Automation", "Selenium", "Manual Testing", "Test Planning", "API Testing",
            "Cypress", "JUnit", "Bug Tracking", "Regression Testing", "CI/CD", "SQL",
        ],
    ),
    (
        "qa tester",
        &[
            "Manual Testing", "Test Cases", "Bug Reporting", "Regression Testing",
            "Exploratory Testing", "Jira", "Test Documentation", "Attention to Detail",
            "Basic SQL",
        ],
    ),
    (
        "security engineer",
        &[
            "Network Security", "Penetration Testing", "Cryptography", "SIEM",
            "Incident Response", "Vulnerability Assessment", "Firewalls", "Python",
            "Cloud Security", "Identity and Access Management", "Threat Modeling",
        ],
    ),
    (
        "business analyst",
        &[
            "Requirements Gathering", "Process Modeling", "SQL", "Excel", "Data Analysis",
            "Stakeholder Management", "UML", "Jira", "Documentation", "Power BI",
            "Communication",
        ],
    ),
    (
        "marketing manager",
        &[
            "Marketing Strategy", "Brand Management", "Digital Marketing",
            "Market Research", "Campaign Management", "Budgeting", "Analytics",
            "Content Strategy", "Leadership", "Communication",
        ],
    ),
    (
        "sales manager",
        &[
            "Sales Strategy", "CRM", "Salesforce", "Negotiation", "Team Leadership",
            "Forecasting", "Pipeline Management", "Customer Relationship Management",
            "Communication", "Target Setting",
        ],
    ),
    (
        "customer success manager",
        &[
            "Customer Onboarding", "Account Management", "CRM", "Customer Retention",
            "Communication", "Problem Solving", "Product Knowledge", "Upselling",
            "Empathy", "Data Analysis",
        ],
    ),
    (
        "hr manager",
        &[
            "Recruitment", "Employee Relations", "Performance Management",
            "Labor Law", "Onboarding", "HRIS", "Compensation and Benefits",
            "Conflict Resolution", "Training and Development", "Communication",
        ],
    ),
    (
        "financial analyst",
        &[
            "Financial Modeling", "Excel", "Forecasting", "Budgeting", "Valuation",
            "Accounting", "SQL", "Power BI", "Financial Reporting", "Variance Analysis",
        ],
    ),
    (
        "accountant",
        &[
            "Accounting", "Bookkeeping", "Excel", "QuickBooks", "Tax Preparation",
            "Financial Reporting", "Auditing", "GAAP", "Accounts Payable",
            "Accounts Receivable", "Attention to Detail",
        ],
    ),
    (
        "technical writer",
        &[
            "Technical Writing", "Documentation", "Markdown", "API Documentation",
            "Editing", "Research", "Git", "Information Architecture", "DITA",
            "Communication",
        ],
    ),
    (
        "content writer",
        &[
            "Copywriting", "SEO Writing", "Content Strategy", "Editing", "Research",
            "Blogging", "WordPress", "Storytelling", "Social Media", "Proofreading",
        ],
    ),
    (
        "seo specialist",
        &[
            "Keyword Research", "On-Page SEO", "Technical SEO", "Link Building",
            "Google Analytics", "Google Search Console", "Content Optimization",
            "SEMrush", "HTML", "Analytics",
        ],
    ),
    (
        "digital marketing specialist",
        &[
            "Social Media Marketing", "Google Ads", "Email Marketing", "SEO", "SEM",
            "Content Marketing", "Google Analytics", "Marketing Automation",
            "A/B Testing", "Copywriting",
        ],
    ),
];

/// Canonical position names, in listing order.
pub const COMMON_POSITIONS: &[&str] = &[
    "Software Developer",
    "Software Engineer",
    "Full Stack Developer",
    "Frontend Developer",
    "Backend Developer",
    "Mobile Developer",
    "Data Scientist",
    "Data Analyst",
    "Data Engineer",
    "Machine Learning Engineer",
    "AI Engineer",
    "DevOps Engineer",
    "Cloud Engineer",
    "System Administrator",
    "Network Engineer",
    "Database Administrator",
    "UI/UX Designer",
    "Graphic Designer",
    "Web Designer",
    "Product Manager",
    "Project Manager",
    "Scrum Master",
    "Quality Assurance Engineer",
    "QA Tester",
    "Security Engineer",
    "Business Analyst",
    "Marketing Manager",
    "Sales Manager",
    "Customer Success Manager",
    "HR Manager",
    "Financial Analyst",
    "Accountant",
    "Technical Writer",
    "Content Writer",
    "SEO Specialist",
    "Digital Marketing Specialist",
];
