/// Spanish display strings.
pub const SPANISH: &[(&str, &str)] = &[
    // ==================== Navigation ====================
    ("nav.home", "Inicio"),
    ("nav.about", "Sobre Mí"),
    ("nav.education", "Educación"),
    ("nav.skills", "Habilidades"),
    ("nav.projects", "Proyectos"),
    ("nav.certificates", "Certificados"),
    ("nav.contact", "Contacto"),

    // ==================== Hero ====================
    ("hero.greeting", "Hola, soy"),
    ("hero.title", "IKRAM LECHQER"),
    ("hero.subtitle", "Estudiante de Ingeniería Informática y Desarrolladora Full Stack"),
    ("hero.cta", "Ver Mi Trabajo"),

    // ==================== About ====================
    ("about.title", "Sobre Mí"),
    (
        "about.description",
        "Estudiante de Ingeniería Informática de cuarto año, motivada y orientada al detalle, con una gran pasión por el desarrollo web, la ingeniería de software y las tecnologías emergentes. Habilidosa en desarrollo front-end y back-end, con experiencia en frameworks modernos y bases de datos. Entusiasta en la creación de aplicaciones web innovadoras, amigables y escalables. Explorando continuamente nuevas tecnologías para mejorar las habilidades de resolución de problemas y mantenerme al día con las tendencias de la industria. Deseosa de contribuir con experiencia técnica y creatividad a proyectos desafiantes en un entorno colaborativo.",
    ),

    // ==================== Education ====================
    ("education.title", "Educación"),
    ("education.karabuk.title", "Licenciatura en Ingeniería Informática"),
    ("education.karabuk.institution", "Universidad de Karabük"),
    ("education.karabuk.date", "Oct 2021 - Oct 2025"),
    ("education.gomycode.title", "Bootcamp de Software"),
    ("education.gomycode.institution", "GOMYCODE"),
    ("education.gomycode.date", "Nov 2024 - Abr 2025"),
    ("education.turkish.title", "Certificado de Idioma Turco"),
    ("education.turkish.institution", "Universidad de Karabük"),
    ("education.turkish.date", "Oct 2020 - May 2021"),
    ("education.turkish.grade", "Nivel: B2"),
    ("education.highschool.title", "Diploma de Bachillerato con Honor"),
    ("education.highschool.institution", "Moulay Idriss 1er, Casablanca, Marruecos"),
    ("education.highschool.date", "2017 - 2020"),

    // ==================== Skills ====================
    ("skills.title", "Habilidades"),
    ("skills.languages.title", "Idiomas"),
    ("skills.languages.amazigh", "Amazigh (Nativo)"),
    ("skills.languages.arabic", "Árabe (Nativo)"),
    ("skills.languages.french", "Francés (B1)"),
    ("skills.languages.english", "Inglés (B2)"),
    ("skills.languages.turkish", "Turco (B2)"),
    ("skills.programming.title", "Habilidades de Programación"),

    // ==================== Projects ====================
    ("projects.title", "Proyectos"),
    (
        "projects.travel.title",
        "Landing Pages de Agencia de Viajes, Restaurante y Tienda E-Commerce",
    ),
    ("projects.travel.tech", "Tecnologías: HTML, Tailwind CSS, JavaScript (Manipulación DOM)"),
    (
        "projects.travel.description1",
        "Diseño de landing pages modernas, responsivas y amigables para una agencia de viajes, restaurante y tienda de comercio electrónico",
    ),
    (
        "projects.travel.description2",
        "Enfoque en optimización UI/UX, mejorando accesibilidad y participación del usuario",
    ),
    (
        "projects.travel.description3",
        "Implementación de interacciones DOM dinámicas para una experiencia de usuario fluida e interactiva",
    ),
    ("projects.bakery.title", "Sitio Web de Panadería"),
    ("projects.bakery.tech", "Tecnologías: HTML, CSS"),
    ("projects.bakery.description1", "Diseño de un sitio web limpio y elegante para una panadería"),
    (
        "projects.bakery.description2",
        "Compatibilidad entre dispositivos para una experiencia de navegación óptima",
    ),
    ("projects.movie.title", "Aplicación de Películas (MERN Stack)"),
    (
        "projects.movie.tech",
        "Tecnologías: React.js, Tailwind CSS, Node.js, Express.js, MongoDB, TMDB API",
    ),
    (
        "projects.movie.description1",
        "Desarrollo de una aplicación de películas full-stack con arquitectura escalable",
    ),
    (
        "projects.movie.description2",
        "Integración de TMDB API para mostrar datos de películas en tiempo real",
    ),
    (
        "projects.movie.description3",
        "Construcción de rutas backend seguras para detalles de películas incluyendo título, año de lanzamiento, tráiler, calificación y sinopsis",
    ),
    (
        "projects.movie.description4",
        "Implementación de adición manual de películas, sección de favoritos y componentes UI intuitivos",
    ),

    // ==================== Certificates ====================
    ("certificates.title", "Certificados"),
    ("certificates.jsalgo.title", "Algoritmos y Estructuras de Datos JavaScript"),
    ("certificates.jsalgo.issuer", "freeCodeCamp"),
    ("certificates.jsalgo.date", "Emitido en Feb 2025"),
    ("certificates.jsalgo.credential", "ID de Credencial koukky-jaads"),
    ("certificates.postman.title", "Fundamentos de API Postman"),
    ("certificates.postman.issuer", "Postman"),
    ("certificates.postman.date", "Emitido en Feb 2025"),
    ("certificates.webdesign.title", "Diseño Web Responsivo"),
    ("certificates.webdesign.issuer", "freeCodeCamp"),
    ("certificates.webdesign.date", "Emitido en Ene 2025"),
    ("certificates.webdesign.credential", "ID de Credencial koukky-rwd"),
    ("certificates.oracle.title", "Diseño de Base de Datos y Programación con SQL"),
    ("certificates.oracle.issuer", "Oracle Academy"),

    // ==================== Contact ====================
    ("contact.title", "Contáctame"),
    ("contact.name", "Nombre"),
    ("contact.email", "Correo"),
    ("contact.message", "Mensaje"),
    ("contact.send", "Enviar Mensaje"),
    ("contact.namePlaceholder", "Tu nombre"),
    ("contact.emailPlaceholder", "tu.correo@ejemplo.com"),
    ("contact.messagePlaceholder", "Tu mensaje..."),
    ("contact.sending", "Enviando..."),
    ("contact.success", "¡Mensaje enviado!"),
    ("contact.successMessage", "Gracias por escribirme. Te responderé pronto."),
    ("contact.error", "No se pudo enviar el mensaje"),
    ("contact.errorMessage", "Algo salió mal. Por favor, inténtalo de nuevo más tarde."),
    ("contact.validation.name", "El nombre debe tener al menos 2 caracteres."),
    ("contact.validation.email", "Introduce una dirección de correo electrónico válida."),
    ("contact.validation.message", "El mensaje debe tener al menos 10 caracteres."),

    // ==================== Footer ====================
    ("footer.rights", "Todos los Derechos Reservados"),
    ("footer.madeby", "Hecho con ❤️ por IKRAM LECHQER"),
];
