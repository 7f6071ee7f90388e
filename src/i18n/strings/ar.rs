/// Arabic display strings (right-to-left).
pub const ARABIC: &[(&str, &str)] = &[
    // ==================== Navigation ====================
    ("nav.home", "الرئيسية"),
    ("nav.about", "نبذة عني"),
    ("nav.education", "التعليم"),
    ("nav.skills", "المهارات"),
    ("nav.projects", "المشاريع"),
    ("nav.certificates", "الشهادات"),
    ("nav.contact", "اتصل بي"),

    // ==================== Hero ====================
    ("hero.greeting", "مرحباً، أنا"),
    ("hero.title", "إكرام لشقر"),
    ("hero.subtitle", "طالبة هندسة حاسوب ومطورة ويب متكاملة"),
    ("hero.cta", "عرض أعمالي"),

    // ==================== About ====================
    ("about.title", "نبذة عني"),
    (
        "about.description",
        "طالبة هندسة كمبيوتر في السنة الرابعة، متحمسة ودقيقة في التفاصيل، ولدي شغف كبير بتطوير الويب وهندسة البرمجيات والتقنيات الناشئة. ماهرة في تطوير الواجهة الأمامية والخلفية، مع خبرة في الأطر والقواعد البيانات الحديثة. متحمسة لبناء تطبيقات ويب مبتكرة وسهلة الاستخدام وقابلة للتوسع. أستكشف باستمرار تقنيات جديدة لتعزيز قدراتي في حل المشكلات والبقاء على اطلاع بأحدث التطورات. متحمسة للمساهمة بخبرتي التقنية وإبداعي في المشاريع الصعبة ضمن بيئة تعاونية.",
    ),

    // ==================== Education ====================
    ("education.title", "التعليم"),
    ("education.karabuk.title", "بكالوريوس، هندسة الحاسوب"),
    ("education.karabuk.institution", "جامعة كارابوك"),
    ("education.karabuk.date", "أكتوبر 2021 - أكتوبر 2025"),
    ("education.gomycode.title", "معسكر تدريبي للبرمجيات"),
    ("education.gomycode.institution", "GOMYCODE"),
    ("education.gomycode.date", "نوفمبر 2024 - أبريل 2025"),
    ("education.turkish.title", "شهادة اللغة التركية"),
    ("education.turkish.institution", "جامعة كارابوك"),
    ("education.turkish.date", "أكتوبر 2020 - مايو 2021"),
    ("education.turkish.grade", "الدرجة: B2"),
    ("education.highschool.title", "شهادة الثانوية بمرتبة الشرف"),
    ("education.highschool.institution", "مولاي إدريس الأول، الدار البيضاء، المغرب"),
    ("education.highschool.date", "2017 - 2020"),

    // ==================== Skills ====================
    ("skills.title", "المهارات"),
    ("skills.languages.title", "اللغات"),
    ("skills.languages.amazigh", "الأمازيغية (لغة أم)"),
    ("skills.languages.arabic", "العربية (لغة أم)"),
    ("skills.languages.french", "الفرنسية (B1)"),
    ("skills.languages.english", "الإنجليزية (B2)"),
    ("skills.languages.turkish", "التركية (B2)"),
    ("skills.programming.title", "مهارات البرمجة"),

    // ==================== Projects ====================
    ("projects.title", "المشاريع"),
    ("projects.travel.title", "صفحات هبوط لوكالة سفر ومطعم ومتجر إلكتروني"),
    ("projects.travel.tech", "التقنيات: HTML، Tailwind CSS، JavaScript (معالجة DOM)"),
    (
        "projects.travel.description1",
        "تصميم صفحات هبوط حديثة ومتجاوبة وسهلة الاستخدام لوكالة سفر ومطعم ومتجر إلكتروني",
    ),
    (
        "projects.travel.description2",
        "تركيز على تحسين واجهة المستخدم وتجربة المستخدم وتعزيز إمكانية الوصول والمشاركة",
    ),
    ("projects.travel.description3", "تنفيذ تفاعلات DOM ديناميكية لتجربة مستخدم سلسة وتفاعلية"),
    ("projects.bakery.title", "موقع مخبز"),
    ("projects.bakery.tech", "التقنيات: HTML، CSS"),
    ("projects.bakery.description1", "تصميم موقع عرض أنيق ونظيف لمخبز"),
    ("projects.bakery.description2", "ضمان التوافق عبر مختلف الأجهزة لتجربة تصفح مثالية"),
    ("projects.movie.title", "تطبيق أفلام (MERN Stack)"),
    (
        "projects.movie.tech",
        "التقنيات: React.js، Tailwind CSS، Node.js، Express.js، MongoDB، TMDB API",
    ),
    ("projects.movie.description1", "تطوير تطبيق أفلام متكامل بهيكلية قابلة للتوسع"),
    ("projects.movie.description2", "دمج TMDB API لعرض بيانات الأفلام في الوقت الفعلي"),
    (
        "projects.movie.description3",
        "بناء مسارات خلفية آمنة لتفاصيل الفيلم بما في ذلك العنوان وسنة الإصدار والمقطع الدعائي والتقييم والملخص",
    ),
    (
        "projects.movie.description4",
        "تنفيذ إضافة الأفلام يدويًا وقسم المفضلة ومكونات واجهة مستخدم بديهية",
    ),

    // ==================== Certificates ====================
    ("certificates.title", "الشهادات"),
    ("certificates.jsalgo.title", "خوارزميات وهياكل بيانات JavaScript"),
    ("certificates.jsalgo.issuer", "freeCodeCamp"),
    ("certificates.jsalgo.date", "صدرت في فبراير 2025"),
    ("certificates.jsalgo.credential", "رقم الشهادة koukky-jaads"),
    ("certificates.postman.title", "أساسيات Postman API"),
    ("certificates.postman.issuer", "Postman"),
    ("certificates.postman.date", "صدرت في فبراير 2025"),
    ("certificates.webdesign.title", "تصميم الويب المتجاوب"),
    ("certificates.webdesign.issuer", "freeCodeCamp"),
    ("certificates.webdesign.date", "صدرت في يناير 2025"),
    ("certificates.webdesign.credential", "رقم الشهادة koukky-rwd"),
    ("certificates.oracle.title", "تصميم قواعد البيانات والبرمجة بلغة SQL"),
    ("certificates.oracle.issuer", "أكاديمية أوراكل"),

    // ==================== Contact ====================
    ("contact.title", "اتصل بي"),
    ("contact.name", "الاسم"),
    ("contact.email", "البريد الإلكتروني"),
    ("contact.message", "الرسالة"),
    ("contact.send", "إرسال الرسالة"),
    ("contact.namePlaceholder", "اسمك"),
    ("contact.emailPlaceholder", "your.email@example.com"),
    ("contact.messagePlaceholder", "رسالتك..."),
    ("contact.sending", "جارٍ الإرسال..."),
    ("contact.success", "تم إرسال الرسالة!"),
    ("contact.successMessage", "شكرًا لتواصلك. سأرد عليك قريبًا."),
    ("contact.error", "فشل إرسال الرسالة"),
    ("contact.errorMessage", "حدث خطأ ما. يرجى المحاولة مرة أخرى لاحقًا."),
    ("contact.validation.name", "يجب أن يتكون الاسم من حرفين على الأقل."),
    ("contact.validation.email", "يرجى إدخال عنوان بريد إلكتروني صالح."),
    ("contact.validation.message", "يجب أن تتكون الرسالة من 10 أحرف على الأقل."),

    // ==================== Footer ====================
    ("footer.rights", "جميع الحقوق محفوظة"),
    ("footer.madeby", "صنع بـ ❤️ بواسطة إكرام لشقر"),
];
