/// English display strings (canonical; every other table is checked against this one).
pub const ENGLISH: &[(&str, &str)] = &[
    // ==================== Navigation ====================
    ("nav.home", "Home"),
    ("nav.about", "About Me"),
    ("nav.education", "Education"),
    ("nav.skills", "Skills"),
    ("nav.projects", "Projects"),
    ("nav.certificates", "Certificates"),
    ("nav.contact", "Contact"),

    // ==================== Hero ====================
    ("hero.greeting", "Hello, I am"),
    ("hero.title", "IKRAM LECHQER"),
    ("hero.subtitle", "Computer Engineering Student & Full Stack Developer"),
    ("hero.cta", "View My Work"),

    // ==================== About ====================
    ("about.title", "About Me"),
    (
        "about.description",
        "A highly motivated and detail-oriented 4th-year Computer Engineering student with a strong passion for web development, software engineering, and emerging technologies. Skilled in front-end and back-end development, with experience in modern frameworks and databases. Enthusiastic about building innovative, user-friendly, and scalable web applications. Continuously exploring new technologies to enhance problem-solving abilities and stay up to date with industry trends. Eager to contribute technical expertise and creativity to challenging projects in a collaborative environment.",
    ),

    // ==================== Education ====================
    ("education.title", "Education"),
    ("education.karabuk.title", "Bachelor's degree, Computer Engineering"),
    ("education.karabuk.institution", "Karabuk University"),
    ("education.karabuk.date", "Oct 2021 - Oct 2025"),
    ("education.gomycode.title", "Software Bootcamp"),
    ("education.gomycode.institution", "GOMYCODE"),
    ("education.gomycode.date", "Nov 2024 - Apr 2025"),
    ("education.turkish.title", "Turkish Language Certificate"),
    ("education.turkish.institution", "Karabuk University"),
    ("education.turkish.date", "Oct 2020 - May 2021"),
    ("education.turkish.grade", "Grade: B2"),
    ("education.highschool.title", "High School Degree with Honor"),
    ("education.highschool.institution", "Moulay Idriss 1er, Casablanca, Morocco"),
    ("education.highschool.date", "2017 - 2020"),

    // ==================== Skills ====================
    ("skills.title", "Skills"),
    ("skills.languages.title", "Languages"),
    ("skills.languages.amazigh", "Amazigh (Native)"),
    ("skills.languages.arabic", "Arabic (Native)"),
    ("skills.languages.french", "French (B1)"),
    ("skills.languages.english", "English (B2)"),
    ("skills.languages.turkish", "Turkish (B2)"),
    ("skills.programming.title", "Programming Skills"),

    // ==================== Projects ====================
    ("projects.title", "Projects"),
    ("projects.travel.title", "Travel Agency, Restaurant & E-Commerce Landing Pages"),
    ("projects.travel.tech", "Technologies: HTML, Tailwind CSS, JavaScript (DOM Manipulation)"),
    (
        "projects.travel.description1",
        "Designed modern, responsive, and user-friendly landing pages for a travel agency, restaurant, and e-commerce store",
    ),
    (
        "projects.travel.description2",
        "Focused on UI/UX optimization, enhancing accessibility and user engagement",
    ),
    (
        "projects.travel.description3",
        "Implemented dynamic DOM interactions for a seamless and interactive user experience",
    ),
    ("projects.bakery.title", "Bakery Website"),
    ("projects.bakery.tech", "Technologies: HTML, CSS"),
    ("projects.bakery.description1", "Designed a clean and elegant showcase website for a bakery"),
    (
        "projects.bakery.description2",
        "Ensured cross-device compatibility for an optimal browsing experience",
    ),
    ("projects.movie.title", "MovieApp (MERN Stack)"),
    (
        "projects.movie.tech",
        "Technologies: React.js, Tailwind CSS, Node.js, Express.js, MongoDB, TMDB API",
    ),
    (
        "projects.movie.description1",
        "Developed a full-stack movie application with a scalable architecture",
    ),
    ("projects.movie.description2", "Integrated TMDB API to display real-time movie data"),
    (
        "projects.movie.description3",
        "Built secure backend routes for movie details including title, release year, trailer, rating, and synopsis",
    ),
    (
        "projects.movie.description4",
        "Implemented manual movie addition, a favorites section, and intuitive UI components",
    ),

    // ==================== Certificates ====================
    ("certificates.title", "Certificates"),
    ("certificates.jsalgo.title", "JavaScript Algorithms and Data Structures"),
    ("certificates.jsalgo.issuer", "freeCodeCamp"),
    ("certificates.jsalgo.date", "Issued Feb 2025"),
    ("certificates.jsalgo.credential", "Credential ID koukky-jaads"),
    ("certificates.postman.title", "Postman API Fundamentals"),
    ("certificates.postman.issuer", "Postman"),
    ("certificates.postman.date", "Issued Feb 2025"),
    ("certificates.webdesign.title", "Responsive Web Design"),
    ("certificates.webdesign.issuer", "freeCodeCamp"),
    ("certificates.webdesign.date", "Issued Jan 2025"),
    ("certificates.webdesign.credential", "Credential ID koukky-rwd"),
    ("certificates.oracle.title", "Database Design and Programming with SQL"),
    ("certificates.oracle.issuer", "Oracle Academy"),

    // ==================== Contact ====================
    ("contact.title", "Contact Me"),
    ("contact.name", "Name"),
    ("contact.email", "Email"),
    ("contact.message", "Message"),
    ("contact.send", "Send Message"),
    ("contact.namePlaceholder", "Your name"),
    ("contact.emailPlaceholder", "your.email@example.com"),
    ("contact.messagePlaceholder", "Your message..."),
    ("contact.sending", "Sending..."),
    ("contact.success", "Message sent!"),
    ("contact.successMessage", "Thank you for reaching out. I'll get back to you soon."),
    ("contact.error", "Failed to send message"),
    ("contact.errorMessage", "Something went wrong. Please try again later."),
    ("contact.validation.name", "Name must be at least 2 characters."),
    ("contact.validation.email", "Please enter a valid email address."),
    ("contact.validation.message", "Message must be at least 10 characters."),

    // ==================== Footer ====================
    ("footer.rights", "All Rights Reserved"),
    ("footer.madeby", "Made with ❤️ by IKRAM LECHQER"),
];
