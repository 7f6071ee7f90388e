/// Turkish display strings.
pub const TURKISH: &[(&str, &str)] = &[
    // ==================== Navigation ====================
    ("nav.home", "Ana Sayfa"),
    ("nav.about", "Hakkımda"),
    ("nav.education", "Eğitim"),
    ("nav.skills", "Yetenekler"),
    ("nav.projects", "Projeler"),
    ("nav.certificates", "Sertifikalar"),
    ("nav.contact", "İletişim"),

    // ==================== Hero ====================
    ("hero.greeting", "Merhaba, ben"),
    ("hero.title", "IKRAM LECHQER"),
    ("hero.subtitle", "Bilgisayar Mühendisliği Öğrencisi ve Full Stack Geliştirici"),
    ("hero.cta", "Çalışmalarımı Gör"),

    // ==================== About ====================
    ("about.title", "Hakkımda"),
    (
        "about.description",
        "Web geliştirme, yazılım mühendisliği ve yeni teknolojilere büyük bir tutkusu olan, motive ve detay odaklı 4. sınıf Bilgisayar Mühendisliği öğrencisi. Modern framework'ler ve veritabanlarında deneyimli, ön uç ve arka uç geliştirmede yetenekli. Yenilikçi, kullanıcı dostu ve ölçeklenebilir web uygulamaları oluşturma konusunda hevesli. Problem çözme yeteneklerini geliştirmek ve sektör trendleriyle güncel kalmak için sürekli olarak yeni teknolojiler keşfeden. İşbirlikçi bir ortamda zorlu projelere teknik uzmanlık ve yaratıcılık katkısında bulunmaya istekli.",
    ),

    // ==================== Education ====================
    ("education.title", "Eğitim"),
    ("education.karabuk.title", "Lisans, Bilgisayar Mühendisliği"),
    ("education.karabuk.institution", "Karabük Üniversitesi"),
    ("education.karabuk.date", "Ekim 2021 - Ekim 2025"),
    ("education.gomycode.title", "Yazılım Bootcamp"),
    ("education.gomycode.institution", "GOMYCODE"),
    ("education.gomycode.date", "Kasım 2024 - Nisan 2025"),
    ("education.turkish.title", "Türkçe Dil Sertifikası"),
    ("education.turkish.institution", "Karabük Üniversitesi"),
    ("education.turkish.date", "Ekim 2020 - Mayıs 2021"),
    ("education.turkish.grade", "Seviye: B2"),
    ("education.highschool.title", "Onur Dereceli Lise Diploması"),
    ("education.highschool.institution", "Moulay Idriss 1er, Casablanca, Fas"),
    ("education.highschool.date", "2017 - 2020"),

    // ==================== Skills ====================
    ("skills.title", "Yetenekler"),
    ("skills.languages.title", "Diller"),
    ("skills.languages.amazigh", "Amazigh (Anadil)"),
    ("skills.languages.arabic", "Arapça (Anadil)"),
    ("skills.languages.french", "Fransızca (B1)"),
    ("skills.languages.english", "İngilizce (B2)"),
    ("skills.languages.turkish", "Türkçe (B2)"),
    ("skills.programming.title", "Programlama Becerileri"),

    // ==================== Projects ====================
    ("projects.title", "Projeler"),
    ("projects.travel.title", "Seyahat Acentesi, Restoran ve E-Ticaret Açılış Sayfaları"),
    ("projects.travel.tech", "Teknolojiler: HTML, Tailwind CSS, JavaScript (DOM Manipülasyonu)"),
    (
        "projects.travel.description1",
        "Seyahat acentesi, restoran ve e-ticaret mağazası için modern, duyarlı ve kullanıcı dostu açılış sayfaları tasarladım",
    ),
    (
        "projects.travel.description2",
        "UI/UX optimizasyonu, erişilebilirlik ve kullanıcı etkileşimini artırmaya odaklandım",
    ),
    (
        "projects.travel.description3",
        "Sorunsuz ve etkileşimli bir kullanıcı deneyimi için dinamik DOM etkileşimleri uyguladım",
    ),
    ("projects.bakery.title", "Fırın Web Sitesi"),
    ("projects.bakery.tech", "Teknolojiler: HTML, CSS"),
    (
        "projects.bakery.description1",
        "Bir fırın için temiz ve zarif bir vitrin web sitesi tasarladım",
    ),
    (
        "projects.bakery.description2",
        "Optimum tarama deneyimi için cihazlar arası uyumluluk sağladım",
    ),
    ("projects.movie.title", "Film Uygulaması (MERN Stack)"),
    (
        "projects.movie.tech",
        "Teknolojiler: React.js, Tailwind CSS, Node.js, Express.js, MongoDB, TMDB API",
    ),
    (
        "projects.movie.description1",
        "Ölçeklenebilir bir mimariye sahip tam yığın film uygulaması geliştirdim",
    ),
    (
        "projects.movie.description2",
        "Gerçek zamanlı film verilerini görüntülemek için TMDB API entegrasyonu yaptım",
    ),
    (
        "projects.movie.description3",
        "Başlık, yayın yılı, fragman, derecelendirme ve özet dahil film detayları için güvenli backend rotaları oluşturdum",
    ),
    (
        "projects.movie.description4",
        "Manuel film ekleme, favoriler bölümü ve sezgisel UI bileşenleri uyguladım",
    ),

    // ==================== Certificates ====================
    ("certificates.title", "Sertifikalar"),
    ("certificates.jsalgo.title", "JavaScript Algoritmaları ve Veri Yapıları"),
    ("certificates.jsalgo.issuer", "freeCodeCamp"),
    ("certificates.jsalgo.date", "Şubat 2025'te verildi"),
    ("certificates.jsalgo.credential", "Kimlik No koukky-jaads"),
    ("certificates.postman.title", "Postman API Temelleri"),
    ("certificates.postman.issuer", "Postman"),
    ("certificates.postman.date", "Şubat 2025'te verildi"),
    ("certificates.webdesign.title", "Duyarlı Web Tasarımı"),
    ("certificates.webdesign.issuer", "freeCodeCamp"),
    ("certificates.webdesign.date", "Ocak 2025'te verildi"),
    ("certificates.webdesign.credential", "Kimlik No koukky-rwd"),
    ("certificates.oracle.title", "Veritabanı Tasarımı ve SQL ile Programlama"),
    ("certificates.oracle.issuer", "Oracle Academy"),

    // ==================== Contact ====================
    ("contact.title", "Benimle İletişime Geç"),
    ("contact.name", "İsim"),
    ("contact.email", "E-posta"),
    ("contact.message", "Mesaj"),
    ("contact.send", "Mesaj Gönder"),
    ("contact.namePlaceholder", "Adınız"),
    ("contact.emailPlaceholder", "eposta@ornek.com"),
    ("contact.messagePlaceholder", "Mesajınız..."),
    ("contact.sending", "Gönderiliyor..."),
    ("contact.success", "Mesaj gönderildi!"),
    (
        "contact.successMessage",
        "Benimle iletişime geçtiğiniz için teşekkürler. En kısa sürede dönüş yapacağım.",
    ),
    ("contact.error", "Mesaj gönderilemedi"),
    ("contact.errorMessage", "Bir şeyler ters gitti. Lütfen daha sonra tekrar deneyin."),
    ("contact.validation.name", "Ad en az 2 karakter olmalıdır."),
    ("contact.validation.email", "Lütfen geçerli bir e-posta adresi girin."),
    ("contact.validation.message", "Mesaj en az 10 karakter olmalıdır."),

    // ==================== Footer ====================
    ("footer.rights", "Tüm Hakları Saklıdır"),
    ("footer.madeby", "IKRAM LECHQER tarafından ❤️ ile yapıldı"),
];
