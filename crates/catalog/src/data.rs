//! The static datasets.
//!
//! All three entity arrays are authored here and built once per process.
//! Invariant: every bilingual field pair is non-empty in both locales; the
//! tests at the bottom enforce it for the whole dataset.

use std::sync::OnceLock;

use chrono::NaiveDate;

use zagros_core::{FaqId, JobId, LocalizedList, LocalizedText, ProductId};

use crate::faq::{FaqCategory, FaqItem};
use crate::job::{Job, JobType};
use crate::product::{Certification, Product, ProductCategory};

fn lt(en: &str, fa: &str) -> LocalizedText {
    LocalizedText::new(en, fa)
}

/// The export catalog.
pub fn products() -> &'static [Product] {
    static PRODUCTS: OnceLock<Vec<Product>> = OnceLock::new();
    PRODUCTS.get_or_init(build_products)
}

/// Current job openings.
pub fn jobs() -> &'static [Job] {
    static JOBS: OnceLock<Vec<Job>> = OnceLock::new();
    JOBS.get_or_init(build_jobs)
}

/// Frequently asked questions.
pub fn faqs() -> &'static [FaqItem] {
    static FAQS: OnceLock<Vec<FaqItem>> = OnceLock::new();
    FAQS.get_or_init(build_faqs)
}

pub fn product_by_id(id: ProductId) -> Option<&'static Product> {
    products().iter().find(|p| p.id == id)
}

pub fn job_by_id(id: JobId) -> Option<&'static Job> {
    jobs().iter().find(|j| j.id == id)
}

fn build_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: lt("Super Negin Saffron", "زعفران سوپر نگین"),
            description: lt(
                "All-red, straight-cut stigmas from the first autumn harvest in Khorasan. \
                 Deep crimson color, coloring strength above 270 USP.",
                "کلاله‌های یکدست قرمز و صاف از نخستین برداشت پاییزی خراسان. رنگ ارغوانی سیر، قدرت رنگ‌دهی بالای ۲۷۰ واحد.",
            ),
            origin: lt("Khorasan", "خراسان"),
            grade: lt("Super Negin, ISO 3632 Grade I", "سوپر نگین، درجه یک ISO 3632"),
            shelf_life: lt("24 months in sealed tins", "۲۴ ماه در قوطی دربسته"),
            min_order: lt("5 kg", "۵ کیلوگرم"),
            category: ProductCategory::Saffron,
            certifications: vec![
                Certification::Iso22000,
                Certification::Haccp,
                Certification::Organic,
            ],
            packaging: vec![
                lt("250 g bulk tins", "قوطی فله ۲۵۰ گرمی"),
                lt("1–5 g retail jars, private label", "شیشه خرده‌فروشی ۱ تا ۵ گرمی با برند اختصاصی"),
            ],
            image: "/assets/products/super-negin.jpg".to_string(),
            gallery: vec![
                "/assets/products/super-negin.jpg".to_string(),
                "/assets/products/super-negin-field.jpg".to_string(),
                "/assets/products/super-negin-tin.jpg".to_string(),
            ],
            available: true,
        },
        Product {
            id: ProductId::new(2),
            name: lt("Sargol Saffron", "زعفران سرگل"),
            description: lt(
                "Red stigma tips separated from the style, milled-harvest workhorse grade \
                 for food manufacturers and repackers.",
                "سر کلاله‌های قرمز جداشده از خامه؛ درجه پرمصرف برای تولیدکنندگان مواد غذایی و بسته‌بندی مجدد.",
            ),
            origin: lt("Khorasan", "خراسان"),
            grade: lt("Sargol, ISO 3632 Grade I", "سرگل، درجه یک ISO 3632"),
            shelf_life: lt("24 months in sealed tins", "۲۴ ماه در قوطی دربسته"),
            min_order: lt("10 kg", "۱۰ کیلوگرم"),
            category: ProductCategory::Saffron,
            certifications: vec![Certification::Iso22000, Certification::Haccp],
            packaging: vec![
                lt("500 g bulk tins", "قوطی فله ۵۰۰ گرمی"),
                lt("1 kg vacuum packs", "بسته وکیوم ۱ کیلوگرمی"),
            ],
            image: "/assets/products/sargol.jpg".to_string(),
            gallery: vec![
                "/assets/products/sargol.jpg".to_string(),
                "/assets/products/sargol-close.jpg".to_string(),
            ],
            available: true,
        },
        Product {
            id: ProductId::new(3),
            name: lt("Akbari Pistachio", "پسته اکبری"),
            description: lt(
                "Long, large-kernel pistachio from Kerman orchards. Roasted or raw, \
                 in-shell, mechanically sorted and hand-finished.",
                "پسته کشیده و درشت‌مغز باغ‌های کرمان. خام یا بوداده، با پوست، سورت مکانیزه و بازبینی دستی.",
            ),
            origin: lt("Kerman", "کرمان"),
            grade: lt("22–24 per ounce", "۲۲ تا ۲۴ دانه در اونس"),
            shelf_life: lt("12 months in cool, dry storage", "۱۲ ماه در انبار خنک و خشک"),
            min_order: lt("1 metric ton", "۱ تن"),
            category: ProductCategory::Nuts,
            certifications: vec![
                Certification::Iso22000,
                Certification::Haccp,
                Certification::Fda,
            ],
            packaging: vec![
                lt("10 kg vacuum cartons", "کارتن وکیوم ۱۰ کیلوگرمی"),
                lt("25 kg kraft bags", "کیسه کرافت ۲۵ کیلوگرمی"),
            ],
            image: "/assets/products/akbari.jpg".to_string(),
            gallery: vec![
                "/assets/products/akbari.jpg".to_string(),
                "/assets/products/akbari-roasted.jpg".to_string(),
            ],
            available: true,
        },
        Product {
            id: ProductId::new(4),
            name: lt("Fandoghi Pistachio", "پسته فندقی"),
            description: lt(
                "Round pistachio with the highest kernel-to-shell ratio, the standard \
                 choice for roasteries and snack mixes.",
                "پسته گرد با بالاترین نسبت مغز به پوست؛ انتخاب رایج برشته‌کاری‌ها و مخلوط‌های آجیلی.",
            ),
            origin: lt("Kerman", "کرمان"),
            grade: lt("28–30 per ounce", "۲۸ تا ۳۰ دانه در اونس"),
            shelf_life: lt("12 months in cool, dry storage", "۱۲ ماه در انبار خنک و خشک"),
            min_order: lt("1 metric ton", "۱ تن"),
            category: ProductCategory::Nuts,
            certifications: vec![Certification::Iso22000, Certification::Haccp],
            packaging: vec![
                lt("10 kg vacuum cartons", "کارتن وکیوم ۱۰ کیلوگرمی"),
                lt("50 kg jute sacks", "گونی کنفی ۵۰ کیلوگرمی"),
            ],
            image: "/assets/products/fandoghi.jpg".to_string(),
            gallery: vec!["/assets/products/fandoghi.jpg".to_string()],
            available: true,
        },
        Product {
            id: ProductId::new(5),
            name: lt("Mazafati Dates", "خرمای مضافتی"),
            description: lt(
                "Soft, dark semi-fresh dates from the Bam region, cold-chain shipped. \
                 Moisture 15–18%, naturally sweet with no added sugar.",
                "خرمای نرم و تیره نیمه‌تازه منطقه بم با حمل سردخانه‌ای. رطوبت ۱۵ تا ۱۸ درصد، شیرینی طبیعی بدون شکر افزوده.",
            ),
            origin: lt("Bam", "بم"),
            grade: lt("Grade A, 15–18% moisture", "درجه یک، رطوبت ۱۵ تا ۱۸ درصد"),
            shelf_life: lt("12 months refrigerated", "۱۲ ماه در دمای یخچال"),
            min_order: lt("5 metric tons", "۵ تن"),
            category: ProductCategory::DriedFruit,
            certifications: vec![
                Certification::Iso22000,
                Certification::Haccp,
                Certification::Halal,
            ],
            packaging: vec![
                lt("600 g retail boxes", "جعبه خرده‌فروشی ۶۰۰ گرمی"),
                lt("5 kg bulk cartons", "کارتن فله ۵ کیلوگرمی"),
            ],
            image: "/assets/products/mazafati.jpg".to_string(),
            gallery: vec![
                "/assets/products/mazafati.jpg".to_string(),
                "/assets/products/mazafati-box.jpg".to_string(),
            ],
            available: true,
        },
        Product {
            id: ProductId::new(6),
            name: lt("Golden Raisins", "کشمش طلایی"),
            description: lt(
                "Seedless golden raisins from Malayer vineyards, laser-sorted and \
                 double-washed for direct food-industry use.",
                "کشمش طلایی بی‌دانه تاکستان‌های ملایر، سورت لیزری و دوبار شست‌وشو برای مصرف مستقیم در صنایع غذایی.",
            ),
            origin: lt("Malayer", "ملایر"),
            grade: lt("Grade A, 280–320 berries per 100 g", "درجه یک، ۲۸۰ تا ۳۲۰ دانه در ۱۰۰ گرم"),
            shelf_life: lt("18 months in cool storage", "۱۸ ماه در انبار خنک"),
            min_order: lt("5 metric tons", "۵ تن"),
            category: ProductCategory::DriedFruit,
            certifications: vec![Certification::Iso22000, Certification::Haccp],
            packaging: vec![
                lt("10 kg cartons with liner", "کارتن ۱۰ کیلوگرمی با کیسه داخلی"),
                lt("12.5 kg export cartons", "کارتن صادراتی ۱۲٫۵ کیلوگرمی"),
            ],
            image: "/assets/products/golden-raisins.jpg".to_string(),
            gallery: vec!["/assets/products/golden-raisins.jpg".to_string()],
            available: true,
        },
        Product {
            id: ProductId::new(7),
            name: lt("Dried Barberries", "زرشک پفکی"),
            description: lt(
                "Bright red puffy barberries from South Khorasan, shade-dried to keep \
                 color and tartness. Seasonal availability.",
                "زرشک پفکی قرمز روشن خراسان جنوبی، خشک‌شده در سایه برای حفظ رنگ و ترشی. عرضه فصلی.",
            ),
            origin: lt("South Khorasan", "خراسان جنوبی"),
            grade: lt("Puffy (Pofaki) Grade A", "پفکی درجه یک"),
            shelf_life: lt("12 months in cool storage", "۱۲ ماه در انبار خنک"),
            min_order: lt("500 kg", "۵۰۰ کیلوگرم"),
            category: ProductCategory::DriedFruit,
            certifications: vec![Certification::Iso22000],
            packaging: vec![
                lt("5 kg cartons with liner", "کارتن ۵ کیلوگرمی با کیسه داخلی"),
                lt("200 g retail pouches", "پاکت خرده‌فروشی ۲۰۰ گرمی"),
            ],
            image: "/assets/products/barberries.jpg".to_string(),
            gallery: vec!["/assets/products/barberries.jpg".to_string()],
            available: false,
        },
        Product {
            id: ProductId::new(8),
            name: lt("Damask Rose Buds", "غنچه گل محمدی"),
            description: lt(
                "Whole dried Damask rose buds from Kashan rose fields, for tea blends, \
                 confectionery and cosmetic extraction.",
                "غنچه کامل خشک گل محمدی گلستان‌های کاشان، برای دمنوش، شیرینی‌پزی و استخراج آرایشی.",
            ),
            origin: lt("Kashan", "کاشان"),
            grade: lt("Hand-picked, first flush", "چین اول، دست‌چین"),
            shelf_life: lt("24 months away from light", "۲۴ ماه دور از نور"),
            min_order: lt("200 kg", "۲۰۰ کیلوگرم"),
            category: ProductCategory::Herbal,
            certifications: vec![Certification::Organic, Certification::Iso22000],
            packaging: vec![
                lt("2 kg cartons with liner", "کارتن ۲ کیلوگرمی با کیسه داخلی"),
                lt("50 g retail tins", "قوطی خرده‌فروشی ۵۰ گرمی"),
            ],
            image: "/assets/products/rose-buds.jpg".to_string(),
            gallery: vec![
                "/assets/products/rose-buds.jpg".to_string(),
                "/assets/products/rose-field.jpg".to_string(),
            ],
            available: true,
        },
    ]
}

fn build_jobs() -> Vec<Job> {
    vec![
        Job {
            id: JobId::new(1),
            title: lt("Export Sales Manager", "مدیر فروش صادراتی"),
            description: lt(
                "Own a regional book of wholesale buyers, from first sample shipment to \
                 repeat container orders.",
                "مدیریت سبد خریداران عمده یک منطقه، از ارسال نخستین نمونه تا سفارش‌های مستمر کانتینری.",
            ),
            department: lt("Commercial", "بازرگانی"),
            location: lt("Tehran", "تهران"),
            job_type: JobType::FullTime,
            responsibilities: LocalizedList::new(
                [
                    "Develop and close B2B accounts in assigned markets",
                    "Prepare offers, proforma invoices and shipment schedules",
                    "Represent the company at trade fairs",
                ],
                [
                    "توسعه و نهایی‌سازی مشتریان عمده در بازارهای تعیین‌شده",
                    "تهیه پیشنهاد قیمت، پیش‌فاکتور و برنامه ارسال",
                    "حضور به نمایندگی از شرکت در نمایشگاه‌های تجاری",
                ],
            ),
            requirements: LocalizedList::new(
                [
                    "5+ years in food-commodity export sales",
                    "Fluent English; a third language is a plus",
                    "Working knowledge of Incoterms and documentary payment",
                ],
                [
                    "بیش از ۵ سال سابقه فروش صادراتی مواد غذایی",
                    "تسلط به زبان انگلیسی؛ زبان سوم مزیت است",
                    "آشنایی عملی با اینکوترمز و پرداخت اسنادی",
                ],
            ),
            benefits: LocalizedList::new(
                [
                    "Commission on repeat volume",
                    "International travel budget",
                    "Supplementary health insurance",
                ],
                [
                    "پورسانت بر اساس حجم سفارش‌های مستمر",
                    "بودجه سفرهای خارجی",
                    "بیمه تکمیلی درمان",
                ],
            ),
            posted: NaiveDate::from_ymd_opt(2025, 11, 10).unwrap_or_default(),
        },
        Job {
            id: JobId::new(2),
            title: lt("Quality Control Specialist", "کارشناس کنترل کیفیت"),
            description: lt(
                "Run intake and pre-shipment testing across the Kerman processing line \
                 and keep our certificates audit-ready.",
                "انجام آزمون‌های ورودی و پیش از ارسال در خط فرآوری کرمان و آماده نگه داشتن گواهینامه‌ها برای ممیزی.",
            ),
            department: lt("Quality", "کیفیت"),
            location: lt("Kerman", "کرمان"),
            job_type: JobType::FullTime,
            responsibilities: LocalizedList::new(
                [
                    "Sample and test incoming lots against purchase specs",
                    "Maintain HACCP and ISO 22000 documentation",
                    "Coordinate third-party lab analyses",
                ],
                [
                    "نمونه‌برداری و آزمون محموله‌های ورودی مطابق مشخصات خرید",
                    "نگهداری مستندات HACCP و ISO 22000",
                    "هماهنگی آزمایش‌های آزمایشگاه‌های همکار",
                ],
            ),
            requirements: LocalizedList::new(
                [
                    "Degree in food science or related field",
                    "2+ years in a food QC laboratory",
                    "Familiarity with aflatoxin and pesticide-residue testing",
                ],
                [
                    "مدرک دانشگاهی صنایع غذایی یا رشته مرتبط",
                    "بیش از ۲ سال سابقه در آزمایشگاه کنترل کیفیت مواد غذایی",
                    "آشنایی با آزمون آفلاتوکسین و باقی‌مانده سموم",
                ],
            ),
            benefits: LocalizedList::new(
                [
                    "On-site housing allowance",
                    "Annual training budget",
                    "Supplementary health insurance",
                ],
                [
                    "کمک‌هزینه اسکان",
                    "بودجه آموزشی سالانه",
                    "بیمه تکمیلی درمان",
                ],
            ),
            posted: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap_or_default(),
        },
        Job {
            id: JobId::new(3),
            title: lt("Logistics Coordinator", "هماهنگ‌کننده لجستیک"),
            description: lt(
                "Book, document and track sea and air shipments out of Bandar Abbas and \
                 IKA, keeping buyers informed at every step.",
                "رزرو، اسنادسازی و پیگیری محموله‌های دریایی و هوایی از بندرعباس و فرودگاه امام، با اطلاع‌رسانی مستمر به خریداران.",
            ),
            department: lt("Operations", "عملیات"),
            location: lt("Bandar Abbas", "بندرعباس"),
            job_type: JobType::FullTime,
            responsibilities: LocalizedList::new(
                [
                    "Book container space and negotiate freight rates",
                    "Prepare export documentation and certificates of origin",
                    "Track shipments and resolve port exceptions",
                ],
                [
                    "رزرو فضای کانتینر و مذاکره بر سر نرخ حمل",
                    "تهیه اسناد صادراتی و گواهی مبدأ",
                    "پیگیری محموله‌ها و رفع مشکلات بندری",
                ],
            ),
            requirements: LocalizedList::new(
                [
                    "3+ years in freight forwarding or export operations",
                    "Knowledge of customs formalities for foodstuffs",
                    "Comfortable with English shipping correspondence",
                ],
                [
                    "بیش از ۳ سال سابقه در فورواردری یا عملیات صادرات",
                    "آشنایی با تشریفات گمرکی مواد غذایی",
                    "تسلط بر مکاتبات انگلیسی حمل‌ونقل",
                ],
            ),
            benefits: LocalizedList::new(
                [
                    "Port-city hardship allowance",
                    "Quarterly performance bonus",
                    "Supplementary health insurance",
                ],
                [
                    "فوق‌العاده بدی آب‌وهوا",
                    "پاداش عملکرد فصلی",
                    "بیمه تکمیلی درمان",
                ],
            ),
            posted: NaiveDate::from_ymd_opt(2025, 12, 2).unwrap_or_default(),
        },
        Job {
            id: JobId::new(4),
            title: lt("Content & Localization Editor", "ویراستار محتوا و بومی‌سازی"),
            description: lt(
                "Keep the bilingual catalog, certificates and marketing material accurate \
                 and consistent across English and Persian.",
                "حفظ دقت و یکدستی کاتالوگ دوزبانه، گواهینامه‌ها و محتوای بازاریابی در فارسی و انگلیسی.",
            ),
            department: lt("Marketing", "بازاریابی"),
            location: lt("Tehran", "تهران"),
            job_type: JobType::PartTime,
            responsibilities: LocalizedList::new(
                [
                    "Translate and edit product and website copy",
                    "Review outbound offers for terminology consistency",
                    "Maintain the bilingual glossary",
                ],
                [
                    "ترجمه و ویرایش متن محصولات و وب‌سایت",
                    "بازبینی پیشنهادهای ارسالی از نظر یکدستی اصطلاحات",
                    "نگهداری واژه‌نامه دوزبانه",
                ],
            ),
            requirements: LocalizedList::new(
                [
                    "Native-level Persian and excellent written English",
                    "Editorial experience with commercial content",
                    "Attention to detail with numbers and units",
                ],
                [
                    "فارسی در حد زبان مادری و انگلیسی نوشتاری عالی",
                    "سابقه ویراستاری محتوای بازرگانی",
                    "دقت بالا در اعداد و یکاها",
                ],
            ),
            benefits: LocalizedList::new(
                [
                    "Flexible remote-friendly hours",
                    "Equipment budget",
                    "Book and course stipend",
                ],
                [
                    "ساعت کاری منعطف و امکان دورکاری",
                    "بودجه تجهیزات",
                    "کمک‌هزینه کتاب و دوره آموزشی",
                ],
            ),
            posted: NaiveDate::from_ymd_opt(2026, 2, 14).unwrap_or_default(),
        },
        Job {
            id: JobId::new(5),
            title: lt("Seasonal Sorting Supervisor", "سرپرست سورت فصلی"),
            description: lt(
                "Lead the pistachio sorting floor through the harvest season, from intake \
                 scheduling to final quality sign-off.",
                "سرپرستی سالن سورت پسته در فصل برداشت، از برنامه‌ریزی ورود محصول تا تأیید نهایی کیفیت.",
            ),
            department: lt("Operations", "عملیات"),
            location: lt("Rafsanjan", "رفسنجان"),
            job_type: JobType::Contract,
            responsibilities: LocalizedList::new(
                [
                    "Schedule sorting shifts during harvest peak",
                    "Enforce hygiene and safety procedures on the floor",
                    "Sign off sorted lots against grade specifications",
                ],
                [
                    "برنامه‌ریزی شیفت‌های سورت در اوج برداشت",
                    "اجرای ضوابط بهداشت و ایمنی در سالن",
                    "تأیید محموله‌های سورت‌شده مطابق مشخصات درجه",
                ],
            ),
            requirements: LocalizedList::new(
                [
                    "Prior supervisory experience in food processing",
                    "Availability for the full September–December season",
                    "Residence in or near Rafsanjan",
                ],
                [
                    "سابقه سرپرستی در فرآوری مواد غذایی",
                    "امکان همکاری در کل فصل شهریور تا آذر",
                    "سکونت در رفسنجان یا حوالی آن",
                ],
            ),
            benefits: LocalizedList::new(
                [
                    "Season-completion bonus",
                    "Daily meals on site",
                    "Transport from Rafsanjan city",
                ],
                [
                    "پاداش اتمام فصل",
                    "وعده غذایی روزانه در محل",
                    "سرویس رفت‌وآمد از شهر رفسنجان",
                ],
            ),
            posted: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap_or_default(),
        },
    ]
}

fn build_faqs() -> Vec<FaqItem> {
    vec![
        FaqItem {
            id: FaqId::new(1),
            question: lt(
                "What is the minimum order quantity?",
                "حداقل مقدار سفارش چقدر است؟",
            ),
            answer: lt(
                "Each product lists its own minimum order on its detail page — from 5 kg \
                 for saffron up to 5 tons for dates and raisins. Mixed pallets are \
                 possible for first orders.",
                "حداقل سفارش هر محصول در صفحه همان محصول آمده است — از ۵ کیلوگرم برای زعفران تا ۵ تن برای خرما و کشمش. برای سفارش نخست، پالت ترکیبی نیز امکان‌پذیر است.",
            ),
            category: FaqCategory::Ordering,
        },
        FaqItem {
            id: FaqId::new(2),
            question: lt(
                "Can we receive samples before ordering?",
                "آیا پیش از سفارش می‌توانیم نمونه دریافت کنیم؟",
            ),
            answer: lt(
                "Yes. We courier 50–500 g samples of any catalog product. Sample and \
                 shipping costs are credited against your first order.",
                "بله. نمونه ۵۰ تا ۵۰۰ گرمی هر محصول کاتالوگ را با پیک بین‌المللی می‌فرستیم. هزینه نمونه و ارسال از نخستین سفارش شما کسر می‌شود.",
            ),
            category: FaqCategory::Ordering,
        },
        FaqItem {
            id: FaqId::new(3),
            question: lt(
                "Which Incoterms and ports do you ship under?",
                "با چه اینکوترمز و از کدام بندرها ارسال می‌کنید؟",
            ),
            answer: lt(
                "Standard offers are FOB Bandar Abbas or CFR/CIF your port. Air freight \
                 for saffron leaves from Tehran (IKA). EXW and DAP are available on request.",
                "پیشنهادهای استاندارد به صورت FOB بندرعباس یا CFR/CIF بندر مقصد است. حمل هوایی زعفران از فرودگاه امام خمینی انجام می‌شود. EXW و DAP نیز در صورت درخواست ممکن است.",
            ),
            category: FaqCategory::Shipping,
        },
        FaqItem {
            id: FaqId::new(4),
            question: lt(
                "What is the typical lead time after order confirmation?",
                "زمان آماده‌سازی پس از تأیید سفارش معمولاً چقدر است؟",
            ),
            answer: lt(
                "In-stock goods ship within 10 working days of payment. In-season \
                 processing orders take 3–5 weeks depending on grade and packaging.",
                "کالای موجود ظرف ۱۰ روز کاری پس از پرداخت ارسال می‌شود. سفارش‌های فرآوری در فصل بسته به درجه و بسته‌بندی ۳ تا ۵ هفته زمان می‌برد.",
            ),
            category: FaqCategory::Shipping,
        },
        FaqItem {
            id: FaqId::new(5),
            question: lt(
                "Which quality documents accompany each shipment?",
                "هر محموله با چه مدارک کیفی همراه است؟",
            ),
            answer: lt(
                "Every container ships with a certificate of analysis, health and \
                 phytosanitary certificates, and certificate of origin. Saffron lots \
                 include ISO 3632 lab grading.",
                "هر کانتینر همراه با برگه آنالیز، گواهی بهداشت و قرنطینه گیاهی و گواهی مبدأ ارسال می‌شود. محموله‌های زعفران دارای درجه‌بندی آزمایشگاهی ISO 3632 هستند.",
            ),
            category: FaqCategory::Quality,
        },
        FaqItem {
            id: FaqId::new(6),
            question: lt(
                "How do you control aflatoxin in pistachios?",
                "آفلاتوکسین پسته را چگونه کنترل می‌کنید؟",
            ),
            answer: lt(
                "Lots are laser-sorted, then sampled and tested to EU limits in an \
                 accredited laboratory before loading; the report is shared pre-shipment.",
                "محموله‌ها سورت لیزری می‌شوند و سپس پیش از بارگیری در آزمایشگاه معتبر مطابق حدود اتحادیه اروپا آزمایش می‌شوند؛ گزارش پیش از ارسال در اختیار خریدار قرار می‌گیرد.",
            ),
            category: FaqCategory::Quality,
        },
        FaqItem {
            id: FaqId::new(7),
            question: lt(
                "Which payment terms do you accept?",
                "چه روش‌های پرداختی را می‌پذیرید؟",
            ),
            answer: lt(
                "Bank transfer (T/T) with 30% advance, irrevocable letter of credit at \
                 sight, and open account for established partners.",
                "حواله بانکی با ۳۰ درصد پیش‌پرداخت، اعتبار اسنادی برگشت‌ناپذیر دیداری، و حساب باز برای همکاران قدیمی.",
            ),
            category: FaqCategory::Payment,
        },
        FaqItem {
            id: FaqId::new(8),
            question: lt(
                "Which currencies can we pay in?",
                "با چه ارزهایی می‌توانیم پرداخت کنیم؟",
            ),
            answer: lt(
                "Euro and UAE dirham are standard; other currencies are possible through \
                 our exchange partners — ask the export desk when requesting a quote.",
                "یورو و درهم امارات روال معمول است؛ سایر ارزها از طریق صرافی‌های همکار امکان‌پذیر است — هنگام درخواست پیش‌فاکتور از واحد صادرات بپرسید.",
            ),
            category: FaqCategory::Payment,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn product_bilingual_fields_are_complete() {
        for p in products() {
            assert!(p.name.is_complete(), "product {} name", p.id);
            assert!(p.description.is_complete(), "product {} description", p.id);
            assert!(p.origin.is_complete(), "product {} origin", p.id);
            assert!(p.grade.is_complete(), "product {} grade", p.id);
            assert!(p.shelf_life.is_complete(), "product {} shelf_life", p.id);
            assert!(p.min_order.is_complete(), "product {} min_order", p.id);
            assert!(!p.packaging.is_empty(), "product {} packaging", p.id);
            for pack in &p.packaging {
                assert!(pack.is_complete(), "product {} packaging option", p.id);
            }
            assert!(!p.image.is_empty(), "product {} image", p.id);
            assert!(!p.gallery.is_empty(), "product {} gallery", p.id);
        }
    }

    #[test]
    fn job_bilingual_fields_are_complete() {
        for j in jobs() {
            assert!(j.title.is_complete(), "job {} title", j.id);
            assert!(j.description.is_complete(), "job {} description", j.id);
            assert!(j.department.is_complete(), "job {} department", j.id);
            assert!(j.location.is_complete(), "job {} location", j.id);
            assert!(j.responsibilities.is_complete(), "job {} responsibilities", j.id);
            assert!(j.requirements.is_complete(), "job {} requirements", j.id);
            assert!(j.benefits.is_complete(), "job {} benefits", j.id);
        }
    }

    #[test]
    fn faq_bilingual_fields_are_complete() {
        for f in faqs() {
            assert!(f.question.is_complete(), "faq {} question", f.id);
            assert!(f.answer.is_complete(), "faq {} answer", f.id);
        }
    }

    #[test]
    fn ids_are_unique_within_each_dataset() {
        let product_ids: BTreeSet<_> = products().iter().map(|p| p.id).collect();
        assert_eq!(product_ids.len(), products().len());

        let job_ids: BTreeSet<_> = jobs().iter().map(|j| j.id).collect();
        assert_eq!(job_ids.len(), jobs().len());

        let faq_ids: BTreeSet<_> = faqs().iter().map(|f| f.id).collect();
        assert_eq!(faq_ids.len(), faqs().len());
    }

    #[test]
    fn lookup_by_id_finds_existing_and_rejects_unknown() {
        let first = &products()[0];
        assert_eq!(product_by_id(first.id), Some(first));
        assert!(product_by_id(zagros_core::ProductId::new(999)).is_none());

        let job = &jobs()[0];
        assert_eq!(job_by_id(job.id), Some(job));
        assert!(job_by_id(zagros_core::JobId::new(999)).is_none());
    }

    #[test]
    fn every_faq_category_is_represented() {
        for category in FaqCategory::ALL {
            assert!(
                faqs().iter().any(|f| f.category == category),
                "no FAQ in {category:?}"
            );
        }
    }
}
