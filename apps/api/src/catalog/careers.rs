use super::CareerSeed;

pub const CAREERS: &[CareerSeed] = &[
    CareerSeed {
        id: "fullstack-developer",
        title: "Full-Stack Developer",
        description: "Build end-to-end web applications using modern frameworks and technologies.",
        baseline_score: 92,
        salary: "$75,000 - $120,000",
        growth: "+22% (2023-2033)",
        icon: "fas fa-code",
        required_skills: &["Programming", "Problem Solving", "Communication"],
        matching_interests: &["Technology"],
    },
    CareerSeed {
        id: "ux-ui-designer",
        title: "UX/UI Designer",
        description: "Create intuitive and beautiful user experiences for digital products.",
        baseline_score: 88,
        salary: "$65,000 - $110,000",
        growth: "+13% (2023-2033)",
        icon: "fas fa-paint-brush",
        required_skills: &["Digital Marketing", "Communication", "Problem Solving"],
        matching_interests: &["Creative", "Technology"],
    },
    CareerSeed {
        id: "data-analyst",
        title: "Data Analyst",
        description: "Transform raw data into actionable insights to drive business decisions.",
        baseline_score: 85,
        salary: "$60,000 - $95,000",
        growth: "+25% (2023-2033)",
        icon: "fas fa-chart-bar",
        required_skills: &["Data Analysis", "Problem Solving", "Communication"],
        matching_interests: &["Technology", "Business"],
    },
    CareerSeed {
        id: "product-manager",
        title: "Product Manager",
        description: "Lead product strategy and development from conception to launch.",
        baseline_score: 78,
        salary: "$90,000 - $150,000",
        growth: "+19% (2023-2033)",
        icon: "fas fa-rocket",
        required_skills: &["Leadership", "Communication", "Problem Solving"],
        matching_interests: &["Business", "Technology"],
    },
    CareerSeed {
        id: "data-scientist",
        title: "Data Scientist",
        description: "Use advanced analytics and machine learning to solve complex problems.",
        baseline_score: 82,
        salary: "$95,000 - $165,000",
        growth: "+35% (2023-2033)",
        icon: "fas fa-brain",
        required_skills: &["Data Analysis", "Programming", "Problem Solving"],
        matching_interests: &["Technology", "Science"],
    },
    CareerSeed {
        id: "digital-marketer",
        title: "Digital Marketing Specialist",
        description: "Develop and execute online marketing strategies across multiple channels.",
        baseline_score: 75,
        salary: "$45,000 - $80,000",
        growth: "+10% (2023-2033)",
        icon: "fas fa-bullhorn",
        required_skills: &["Digital Marketing", "Communication", "Data Analysis"],
        matching_interests: &["Creative", "Business"],
    },
    CareerSeed {
        id: "cybersecurity-analyst",
        title: "Cybersecurity Analyst",
        description: "Protect organizations from cyber threats and security breaches.",
        baseline_score: 80,
        salary: "$70,000 - $120,000",
        growth: "+32% (2023-2033)",
        icon: "fas fa-shield-alt",
        required_skills: &["Programming", "Problem Solving", "Communication"],
        matching_interests: &["Technology"],
    },
    CareerSeed {
        id: "software-engineer",
        title: "Software Engineer",
        description: "Design and develop software applications and systems.",
        baseline_score: 90,
        salary: "$80,000 - $140,000",
        growth: "+25% (2023-2033)",
        icon: "fas fa-laptop-code",
        required_skills: &["Programming", "Problem Solving", "Communication"],
        matching_interests: &["Technology"],
    },
    CareerSeed {
        id: "business-analyst",
        title: "Business Analyst",
        description: "Analyze business processes and recommend improvements.",
        baseline_score: 73,
        salary: "$65,000 - $100,000",
        growth: "+14% (2023-2033)",
        icon: "fas fa-chart-line",
        required_skills: &["Data Analysis", "Communication", "Problem Solving"],
        matching_interests: &["Business"],
    },
    CareerSeed {
        id: "content-creator",
        title: "Content Creator",
        description: "Develop engaging content across various digital platforms.",
        baseline_score: 70,
        salary: "$35,000 - $75,000",
        growth: "+8% (2023-2033)",
        icon: "fas fa-video",
        required_skills: &["Digital Marketing", "Communication"],
        matching_interests: &["Creative"],
    },
    CareerSeed {
        id: "research-scientist",
        title: "Research Scientist",
        description: "Conduct scientific research to advance knowledge in specific fields.",
        baseline_score: 76,
        salary: "$70,000 - $130,000",
        growth: "+7% (2023-2033)",
        icon: "fas fa-microscope",
        required_skills: &["Data Analysis", "Problem Solving", "Communication"],
        matching_interests: &["Science"],
    },
    CareerSeed {
        id: "teacher",
        title: "Education Specialist",
        description: "Develop curriculum and teach students in educational settings.",
        baseline_score: 68,
        salary: "$40,000 - $70,000",
        growth: "+5% (2023-2033)",
        icon: "fas fa-chalkboard-teacher",
        required_skills: &["Communication", "Leadership"],
        matching_interests: &["Education"],
    },
    CareerSeed {
        id: "social-worker",
        title: "Social Impact Coordinator",
        description: "Work with communities to address social issues and improve lives.",
        baseline_score: 65,
        salary: "$35,000 - $65,000",
        growth: "+12% (2023-2033)",
        icon: "fas fa-hands-helping",
        required_skills: &["Communication", "Leadership", "Problem Solving"],
        matching_interests: &["Social Impact"],
    },
    CareerSeed {
        id: "ai-engineer",
        title: "AI/ML Engineer",
        description: "Develop artificial intelligence and machine learning solutions.",
        baseline_score: 87,
        salary: "$100,000 - $180,000",
        growth: "+40% (2023-2033)",
        icon: "fas fa-robot",
        required_skills: &["Programming", "Data Analysis", "Problem Solving"],
        matching_interests: &["Technology", "Science"],
    },
    CareerSeed {
        id: "biomedical-engineer",
        title: "Biomedical Engineer",
        description: "Apply engineering principles to solve problems in medicine and biology.",
        baseline_score: 74,
        salary: "$75,000 - $125,000",
        growth: "+6% (2023-2033)",
        icon: "fas fa-heartbeat",
        required_skills: &["Problem Solving", "Data Analysis", "Communication"],
        matching_interests: &["Science", "Technology"],
    },
    CareerSeed {
        id: "environmental-scientist",
        title: "Environmental Scientist",
        description: "Study environmental problems and develop solutions for sustainability.",
        baseline_score: 71,
        salary: "$55,000 - $95,000",
        growth: "+9% (2023-2033)",
        icon: "fas fa-leaf",
        required_skills: &["Data Analysis", "Problem Solving", "Communication"],
        matching_interests: &["Science", "Social Impact"],
    },
    CareerSeed {
        id: "financial-analyst",
        title: "Financial Analyst",
        description: "Analyze financial data to guide investment and business decisions.",
        baseline_score: 77,
        salary: "$60,000 - $110,000",
        growth: "+9% (2023-2033)",
        icon: "fas fa-chart-pie",
        required_skills: &["Data Analysis", "Problem Solving", "Communication"],
        matching_interests: &["Business"],
    },
    CareerSeed {
        id: "game-developer",
        title: "Game Developer",
        description: "Design and develop video games for various platforms.",
        baseline_score: 84,
        salary: "$65,000 - $120,000",
        growth: "+11% (2023-2033)",
        icon: "fas fa-gamepad",
        required_skills: &["Programming", "Problem Solving"],
        matching_interests: &["Technology", "Creative"],
    },
    CareerSeed {
        id: "mobile-developer",
        title: "Mobile App Developer",
        description: "Create mobile applications for iOS and Android platforms.",
        baseline_score: 89,
        salary: "$70,000 - $125,000",
        growth: "+22% (2023-2033)",
        icon: "fas fa-mobile-alt",
        required_skills: &["Programming", "Problem Solving", "Communication"],
        matching_interests: &["Technology"],
    },
    CareerSeed {
        id: "graphic-designer",
        title: "Graphic Designer",
        description: "Create visual content for print and digital media.",
        baseline_score: 72,
        salary: "$40,000 - $75,000",
        growth: "+3% (2023-2033)",
        icon: "fas fa-palette",
        required_skills: &["Digital Marketing", "Communication"],
        matching_interests: &["Creative"],
    },
];
