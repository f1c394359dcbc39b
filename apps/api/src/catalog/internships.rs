use super::InternshipSeed;

pub const INTERNSHIPS: &[InternshipSeed] = &[
    InternshipSeed {
        id: "google-swe-intern",
        company: "Google",
        title: "Software Engineering Intern",
        description: "Work alongside engineers on production services used by millions.",
        location: "Mountain View, CA",
        duration: "12 weeks",
        stipend: "$8,000/month",
        schedule: "Full-time",
        icon: "fas fa-code",
        field: "Technology",
    },
    InternshipSeed {
        id: "deloitte-business-intern",
        company: "Deloitte",
        title: "Business Consulting Intern",
        description: "Support client engagements with research, analysis and presentations.",
        location: "New York, NY",
        duration: "10 weeks",
        stipend: "$5,500/month",
        schedule: "Full-time",
        icon: "fas fa-briefcase",
        field: "Business",
    },
    InternshipSeed {
        id: "adobe-design-intern",
        company: "Adobe",
        title: "Product Design Intern",
        description: "Design and prototype features for creative tools with the UX team.",
        location: "San Francisco, CA",
        duration: "12 weeks",
        stipend: "$6,500/month",
        schedule: "Full-time",
        icon: "fas fa-paint-brush",
        field: "Creative",
    },
    InternshipSeed {
        id: "mayo-research-intern",
        company: "Mayo Clinic",
        title: "Research Science Intern",
        description: "Assist with laboratory studies and data collection in a clinical research group.",
        location: "Rochester, MN",
        duration: "10 weeks",
        stipend: "$4,000/month",
        schedule: "Full-time",
        icon: "fas fa-microscope",
        field: "Science",
    },
    InternshipSeed {
        id: "microsoft-data-intern",
        company: "Microsoft",
        title: "Data Science Intern",
        description: "Build models and dashboards that inform product decisions.",
        location: "Redmond, WA",
        duration: "12 weeks",
        stipend: "$7,800/month",
        schedule: "Full-time",
        icon: "fas fa-chart-bar",
        field: "Technology Data",
    },
    InternshipSeed {
        id: "teach-for-all-intern",
        company: "Teach For All",
        title: "Education Program Intern",
        description: "Help design and evaluate learning programs for partner schools.",
        location: "Remote",
        duration: "8 weeks",
        stipend: "$2,500/month",
        schedule: "Part-time",
        icon: "fas fa-chalkboard-teacher",
        field: "Education",
    },
    InternshipSeed {
        id: "unicef-impact-intern",
        company: "UNICEF",
        title: "Social Impact Intern",
        description: "Support field programs and communications for child-focused initiatives.",
        location: "New York, NY",
        duration: "12 weeks",
        stipend: "$3,000/month",
        schedule: "Full-time",
        icon: "fas fa-hands-helping",
        field: "Social Impact",
    },
    InternshipSeed {
        id: "hubspot-marketing-intern",
        company: "HubSpot",
        title: "Marketing Intern",
        description: "Plan and run inbound campaigns and measure their performance.",
        location: "Boston, MA",
        duration: "10 weeks",
        stipend: "$5,000/month",
        schedule: "Full-time",
        icon: "fas fa-bullhorn",
        field: "Business Marketing",
    },
];
