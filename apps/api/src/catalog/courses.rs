use super::CourseSeed;

pub const COURSES: &[CourseSeed] = &[
    CourseSeed {
        id: "web-dev-bootcamp",
        title: "Complete Web Development Bootcamp",
        description: "HTML, CSS, JavaScript, React and Node.js from first principles to deployed apps.",
        category: "Technology",
        rating: 4.8,
        duration: "12 weeks",
        students: "120k+",
        price: "$89",
    },
    CourseSeed {
        id: "ux-ui-masterclass",
        title: "UX/UI Design Masterclass",
        description: "User research, wireframing, prototyping and usability testing with Figma.",
        category: "Creative Design",
        rating: 4.7,
        duration: "8 weeks",
        students: "65k+",
        price: "$79",
    },
    CourseSeed {
        id: "leadership-communication",
        title: "Leadership & Communication Skills",
        description: "Lead teams, run meetings and communicate with clarity and confidence.",
        category: "Business Leadership",
        rating: 4.6,
        duration: "6 weeks",
        students: "48k+",
        price: "$59",
    },
    CourseSeed {
        id: "data-analysis-python",
        title: "Data Analysis with Python",
        description: "Pandas, NumPy and visualization for turning raw data into insight.",
        category: "Technology Data",
        rating: 4.8,
        duration: "10 weeks",
        students: "95k+",
        price: "$99",
    },
    CourseSeed {
        id: "digital-marketing-fundamentals",
        title: "Digital Marketing Fundamentals",
        description: "SEO, social media, paid campaigns and analytics for modern marketers.",
        category: "Business Marketing",
        rating: 4.5,
        duration: "6 weeks",
        students: "70k+",
        price: "$49",
    },
    CourseSeed {
        id: "machine-learning-intro",
        title: "Introduction to Machine Learning",
        description: "Supervised and unsupervised learning with scikit-learn and real datasets.",
        category: "Technology Science",
        rating: 4.9,
        duration: "11 weeks",
        students: "150k+",
        price: "$129",
    },
    CourseSeed {
        id: "content-creation-storytelling",
        title: "Content Creation & Storytelling",
        description: "Write, film and edit content that builds an audience.",
        category: "Creative Media",
        rating: 4.4,
        duration: "5 weeks",
        students: "30k+",
        price: "$39",
    },
    CourseSeed {
        id: "research-methods",
        title: "Scientific Research Methods",
        description: "Experimental design, statistics and academic writing for researchers.",
        category: "Science",
        rating: 4.6,
        duration: "8 weeks",
        students: "22k+",
        price: "$69",
    },
    CourseSeed {
        id: "teaching-online",
        title: "Teaching & Instructional Design",
        description: "Design curricula and deliver engaging lessons online and in person.",
        category: "Education",
        rating: 4.5,
        duration: "6 weeks",
        students: "18k+",
        price: "$45",
    },
    CourseSeed {
        id: "nonprofit-management",
        title: "Nonprofit Management & Social Impact",
        description: "Fundraising, program design and impact measurement for mission-driven work.",
        category: "Social Impact",
        rating: 4.3,
        duration: "7 weeks",
        students: "12k+",
        price: "$55",
    },
    CourseSeed {
        id: "cybersecurity-essentials",
        title: "Cybersecurity Essentials",
        description: "Threat modelling, network defence and secure coding basics.",
        category: "Technology Security",
        rating: 4.7,
        duration: "9 weeks",
        students: "58k+",
        price: "$89",
    },
    CourseSeed {
        id: "financial-modeling",
        title: "Financial Modeling & Valuation",
        description: "Build three-statement models and value companies in Excel.",
        category: "Business Finance",
        rating: 4.6,
        duration: "6 weeks",
        students: "40k+",
        price: "$99",
    },
];
