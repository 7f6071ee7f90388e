/// French display strings.
pub const FRENCH: &[(&str, &str)] = &[
    // ==================== Navigation ====================
    ("nav.home", "Accueil"),
    ("nav.about", "À Propos"),
    ("nav.education", "Éducation"),
    ("nav.skills", "Compétences"),
    ("nav.projects", "Projets"),
    ("nav.certificates", "Certificats"),
    ("nav.contact", "Contact"),

    // ==================== Hero ====================
    ("hero.greeting", "Bonjour, je suis"),
    ("hero.title", "IKRAM LECHQER"),
    ("hero.subtitle", "Étudiante en Génie Informatique & Développeuse Full Stack"),
    ("hero.cta", "Voir Mon Travail"),

    // ==================== About ====================
    ("about.title", "À Propos de Moi"),
    (
        "about.description",
        "Étudiante en 4ème année de Génie Informatique, motivée et soucieuse du détail, avec une forte passion pour le développement web, l'ingénierie logicielle et les technologies émergentes. Compétente en développement front-end et back-end, avec une expérience dans les frameworks modernes et les bases de données. Enthousiaste à l'idée de créer des applications web innovantes, conviviales et évolutives. Explorant continuellement de nouvelles technologies pour améliorer mes capacités de résolution de problèmes et rester à jour avec les tendances de l'industrie. Désireuse de contribuer avec mon expertise technique et ma créativité à des projets stimulants dans un environnement collaboratif.",
    ),

    // ==================== Education ====================
    ("education.title", "Formation"),
    ("education.karabuk.title", "Licence, Génie Informatique"),
    ("education.karabuk.institution", "Université de Karabük"),
    ("education.karabuk.date", "Oct 2021 - Oct 2025"),
    ("education.gomycode.title", "Bootcamp de Développement"),
    ("education.gomycode.institution", "GOMYCODE"),
    ("education.gomycode.date", "Nov 2024 - Avr 2025"),
    ("education.turkish.title", "Certificat de Langue Turque"),
    ("education.turkish.institution", "Université de Karabük"),
    ("education.turkish.date", "Oct 2020 - Mai 2021"),
    ("education.turkish.grade", "Niveau: B2"),
    ("education.highschool.title", "Baccalauréat avec Mention"),
    ("education.highschool.institution", "Moulay Idriss 1er, Casablanca, Maroc"),
    ("education.highschool.date", "2017 - 2020"),

    // ==================== Skills ====================
    ("skills.title", "Compétences"),
    ("skills.languages.title", "Langues"),
    ("skills.languages.amazigh", "Amazigh (Natif)"),
    ("skills.languages.arabic", "Arabe (Natif)"),
    ("skills.languages.french", "Français (B1)"),
    ("skills.languages.english", "Anglais (B2)"),
    ("skills.languages.turkish", "Turc (B2)"),
    ("skills.programming.title", "Compétences en Programmation"),

    // ==================== Projects ====================
    ("projects.title", "Projets"),
    ("projects.travel.title", "Pages d'Accueil pour Agence de Voyage, Restaurant et E-Commerce"),
    ("projects.travel.tech", "Technologies: HTML, Tailwind CSS, JavaScript (Manipulation DOM)"),
    (
        "projects.travel.description1",
        "Conception de pages d'accueil modernes, responsives et conviviales pour une agence de voyage, un restaurant et une boutique e-commerce",
    ),
    (
        "projects.travel.description2",
        "Accent sur l'optimisation UI/UX, amélioration de l'accessibilité et de l'engagement utilisateur",
    ),
    (
        "projects.travel.description3",
        "Implémentation d'interactions DOM dynamiques pour une expérience utilisateur fluide et interactive",
    ),
    ("projects.bakery.title", "Site Web de Boulangerie"),
    ("projects.bakery.tech", "Technologies: HTML, CSS"),
    (
        "projects.bakery.description1",
        "Conception d'un site vitrine élégant et épuré pour une boulangerie",
    ),
    (
        "projects.bakery.description2",
        "Compatibilité multi-appareils pour une expérience de navigation optimale",
    ),
    ("projects.movie.title", "Application de Films (MERN Stack)"),
    (
        "projects.movie.tech",
        "Technologies: React.js, Tailwind CSS, Node.js, Express.js, MongoDB, TMDB API",
    ),
    (
        "projects.movie.description1",
        "Développement d'une application de films full-stack avec une architecture évolutive",
    ),
    (
        "projects.movie.description2",
        "Intégration de l'API TMDB pour afficher des données de films en temps réel",
    ),
    (
        "projects.movie.description3",
        "Construction de routes backend sécurisées pour les détails des films incluant titre, année de sortie, bande-annonce, note et synopsis",
    ),
    (
        "projects.movie.description4",
        "Implémentation d'ajout manuel de films, d'une section favoris et de composants UI intuitifs",
    ),

    // ==================== Certificates ====================
    ("certificates.title", "Certificats"),
    ("certificates.jsalgo.title", "Algorithmes et Structures de Données JavaScript"),
    ("certificates.jsalgo.issuer", "freeCodeCamp"),
    ("certificates.jsalgo.date", "Délivré en Fév 2025"),
    ("certificates.jsalgo.credential", "ID Certificat koukky-jaads"),
    ("certificates.postman.title", "Fondamentaux API Postman"),
    ("certificates.postman.issuer", "Postman"),
    ("certificates.postman.date", "Délivré en Fév 2025"),
    ("certificates.webdesign.title", "Conception Web Responsive"),
    ("certificates.webdesign.issuer", "freeCodeCamp"),
    ("certificates.webdesign.date", "Délivré en Jan 2025"),
    ("certificates.webdesign.credential", "ID Certificat koukky-rwd"),
    ("certificates.oracle.title", "Conception de Base de Données et Programmation avec SQL"),
    ("certificates.oracle.issuer", "Oracle Academy"),

    // ==================== Contact ====================
    ("contact.title", "Me Contacter"),
    ("contact.name", "Nom"),
    ("contact.email", "Email"),
    ("contact.message", "Message"),
    ("contact.send", "Envoyer le Message"),
    ("contact.namePlaceholder", "Votre nom"),
    ("contact.emailPlaceholder", "votre.email@exemple.com"),
    ("contact.messagePlaceholder", "Votre message..."),
    ("contact.sending", "Envoi en cours..."),
    ("contact.success", "Message envoyé !"),
    ("contact.successMessage", "Merci de m'avoir contacté. Je vous répondrai bientôt."),
    ("contact.error", "Échec de l'envoi du message"),
    ("contact.errorMessage", "Une erreur s'est produite. Veuillez réessayer plus tard."),
    ("contact.validation.name", "Le nom doit contenir au moins 2 caractères."),
    ("contact.validation.email", "Veuillez saisir une adresse e-mail valide."),
    ("contact.validation.message", "Le message doit contenir au moins 10 caractères."),

    // ==================== Footer ====================
    ("footer.rights", "Tous Droits Réservés"),
    ("footer.madeby", "Créé avec ❤️ par IKRAM LECHQER"),
];
