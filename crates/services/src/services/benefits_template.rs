//! Canonical content and merge logic for the patient-benefits page template.
//!
//! The template is a fixed set of named sections. Editors submit sparse
//! overrides; `merge_template_data` reconciles them against the canonical
//! default so the stored payload is always fully populated.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub eyebrow: String,
    pub title: String,
    pub description: String,
    pub button_label: String,
    pub button_target: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct WhyCeramicItem {
    pub icon: String,
    pub title: String,
    pub desc: String,
    pub href: String,
    pub cta_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct WhyCeramicSection {
    pub eyebrow: String,
    pub items: Vec<WhyCeramicItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct IntroTextSection {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct SectionImage {
    pub image_url: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct AdvantageCard {
    pub no: String,
    pub title: String,
    pub subtitle: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct CeramicAdvantagesSection {
    pub eyebrow: String,
    pub title: String,
    pub highlight: String,
    pub intro: String,
    pub cards: Vec<AdvantageCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBlockSection {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image_url: String,
    pub cta_label: String,
    pub cta_href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub img_src: String,
    pub name: String,
    pub country: String,
    pub quote: String,
    pub cta: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct SliderSection {
    pub eyebrow: String,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct PioneeringWorkSection {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image_url: String,
    pub cta_label: String,
    pub cta_href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct DoctorSection {
    pub name: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
}

/// Fully populated template payload as persisted and rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct BenefitsTemplateData {
    pub hero: HeroSection,
    pub why_ceramic: WhyCeramicSection,
    pub intro_text: IntroTextSection,
    pub section_image: SectionImage,
    pub ceramic_advantages: CeramicAdvantagesSection,
    pub service_block: ServiceBlockSection,
    pub slider: SliderSection,
    pub pioneering_work: PioneeringWorkSection,
    pub doctor: DoctorSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroOverride {
    pub eyebrow: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub button_label: Option<String>,
    pub button_target: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
pub struct WhyCeramicItemOverride {
    pub icon: Option<String>,
    pub title: Option<String>,
    pub desc: Option<String>,
    pub href: Option<String>,
    pub cta_label: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
pub struct WhyCeramicOverride {
    pub eyebrow: Option<String>,
    pub items: Option<Vec<WhyCeramicItemOverride>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
pub struct IntroTextOverride {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionImageOverride {
    pub image_url: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvantageCardOverride {
    pub no: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub desc: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
pub struct CeramicAdvantagesOverride {
    pub eyebrow: Option<String>,
    pub title: Option<String>,
    pub highlight: Option<String>,
    pub intro: Option<String>,
    pub cards: Option<Vec<AdvantageCardOverride>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceBlockOverride {
    pub eyebrow: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub cta_label: Option<String>,
    pub cta_href: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialOverride {
    pub img_src: Option<String>,
    pub name: Option<String>,
    pub country: Option<String>,
    pub quote: Option<String>,
    pub cta: Option<String>,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
pub struct SliderOverride {
    pub eyebrow: Option<String>,
    pub testimonials: Option<Vec<TestimonialOverride>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
pub struct DoctorOverride {
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Sparse editor submission: every section and field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
pub struct BenefitsTemplateOverride {
    pub hero: Option<HeroOverride>,
    pub why_ceramic: Option<WhyCeramicOverride>,
    pub intro_text: Option<IntroTextOverride>,
    pub section_image: Option<SectionImageOverride>,
    pub ceramic_advantages: Option<CeramicAdvantagesOverride>,
    pub service_block: Option<ServiceBlockOverride>,
    pub slider: Option<SliderOverride>,
    pub pioneering_work: Option<ServiceBlockOverride>,
    pub doctor: Option<DoctorOverride>,
}

impl BenefitsTemplateData {
    /// The canonical, fully populated template content. Returns a fresh value
    /// on every call so callers can edit their copy in place.
    pub fn default_content() -> Self {
        Self {
            hero: HeroSection {
                eyebrow: "FAYDALAR".to_string(),
                title: "Biyolojik diş yerine geçen seramik implantlar".to_string(),
                description: "Zirkonyadan yapılmış titanyum alternatifleri yüksek derecede uyumlu ve hijyenik kabul edilmektedir. Bu implantlar, optimal diş eti yapışmasını sağlar, doku stresini en aza indirir ve alerji veya intoleranslar için ideal hale getirir.".to_string(),
                button_label: "Tüm faydaları görüntüle".to_string(),
                button_target: "ceramic-advantages".to_string(),
                image_url: "/images/benefits-for-patients/Patientin-Vorteile.png".to_string(),
            },
            why_ceramic: WhyCeramicSection {
                eyebrow: "NEDEN SERAMİK?".to_string(),
                items: vec![
                    WhyCeramicItem {
                        icon: "/images/benefits-for-patients/Heart.svg".to_string(),
                        title: "Biyouyumlu".to_string(),
                        desc: "SDS implantları çok kolay tolere edilir ve kemiğe güvenli bir şekilde entegre olur.".to_string(),
                        href: "https://pubmed.ncbi.nlm.nih.gov/37436947/".to_string(),
                        cta_label: "Görüntüle".to_string(),
                    },
                    WhyCeramicItem {
                        icon: "/images/benefits-for-patients/Weight.svg".to_string(),
                        title: "Dayanıklı ve sağlam".to_string(),
                        desc: "Seramik implantlar artık stabilite ve uzun ömürlülük açısından titanyum implantları geride bırakmıştır.".to_string(),
                        href: "https://www.dginet.de/wp-content/uploads/sites/4/2024/02/20240130_LL_083-039_S3_Keramikimplantate_lang_2022_meta.pdf".to_string(),
                        cta_label: "Görüntüle".to_string(),
                    },
                    WhyCeramicItem {
                        icon: "/images/benefits-for-patients/Zahn.svg".to_string(),
                        title: "Estetik".to_string(),
                        desc: "İmplantlarımız doğal olarak beyazdır. Güzel bir gülüş için estetik çözüm sunar.".to_string(),
                        href: "https://pubmed.ncbi.nlm.nih.gov/35606734/".to_string(),
                        cta_label: "Görüntüle".to_string(),
                    },
                    WhyCeramicItem {
                        icon: "/images/benefits-for-patients/Rocket.svg".to_string(),
                        title: "Minimal radyasyon".to_string(),
                        desc: "Hammaddelerin özenle seçilmesi sayesinde, titanyuma kıyasla minimal radyasyon sağlar.".to_string(),
                        href: "https://www.dinmedia.de/de/norm/din-en-iso-13356/232848189".to_string(),
                        cta_label: "Görüntüle".to_string(),
                    },
                ],
            },
            intro_text: IntroTextSection {
                text: "SDS ekibimiz seramik implant geliştirme alanında öncü olarak 20 yılı aşkın deneyime sahiptir.\nİsviçre Biohealth Kliniğimizde binlerce implantın başarılı kullanımı bize geniş bir deneyim kazandırmıştır.\nBu deneyim yalnızca doğrudan optimal hasta bakımına katkı sağlamaz, aynı zamanda ürünlerimizin sürekli gelişimini de destekler.\nYenilik ve en yüksek kaliteye olan bağlılığımız, seramik implantolojideki başarımızın temelini oluşturur.".to_string(),
            },
            section_image: SectionImage {
                image_url: "/images/benefits-for-patients/Swiss-Biohealth-Clinic.jpg".to_string(),
                alt: "Swiss Biohealth Clinic".to_string(),
            },
            ceramic_advantages: CeramicAdvantagesSection {
                eyebrow: "HASTALAR İÇİN FAYDALAR".to_string(),
                title: "Seramik implantların".to_string(),
                highlight: "titanyuma üstünlükleri".to_string(),
                intro: "Seramik implantlar, yaygın olarak kullanılan titanyum implantlara en iyi alternatiftir. Titanyum implantlar intoleranslara yol açabilir ve organizmaya metal yükü bindirebilir. Estetik açıdan da seramik implantlar titanyum implantların önündedir; çünkü titanyum implantların griliği sıklıkla yansır.".to_string(),
                cards: vec![
                    AdvantageCard {
                        no: "1.".to_string(),
                        title: "Bütüncül yaklaşım".to_string(),
                        subtitle: "Biyolojik diş hekimliği".to_string(),
                        desc: "SWISS BIOHEALTH konsepti, hastaya ve sağlığına odaklanan bütüncül, biyolojik-tıbbi bir yaklaşımdır.".to_string(),
                    },
                    AdvantageCard {
                        no: "2.".to_string(),
                        title: "Daha kısa tedavi süresi".to_string(),
                        subtitle: "Anında implantasyon".to_string(),
                        desc: "Yenilikçi tedavi, genellikle çekimden hemen sonra implant yerleştirilmesine imkân tanır.".to_string(),
                    },
                    AdvantageCard {
                        no: "3.".to_string(),
                        title: "Estetik".to_string(),
                        subtitle: "Koyu kenarlar yok".to_string(),
                        desc: "SDS seramik implantların doğal diş rengi, diş eti hattında rahatsız edici gri kenarların oluşmasını engeller.".to_string(),
                    },
                    AdvantageCard {
                        no: "4.".to_string(),
                        title: "Seramik daha sağlıklıdır".to_string(),
                        subtitle: "Tamamen metalsiz".to_string(),
                        desc: "Seramik biyouyumlu bir materyal olduğu için optimal uyumluluk sağlanır.".to_string(),
                    },
                    AdvantageCard {
                        no: "5.".to_string(),
                        title: "Uygulamadan".to_string(),
                        subtitle: "Seramik implantolojisinin öncüleri".to_string(),
                        desc: "Seramik öncüsü Dr. Ulrich Volz tarafından kurulan SDS, seramik implantlar alanında yeniliğin lideridir.".to_string(),
                    },
                    AdvantageCard {
                        no: "6.".to_string(),
                        title: "Minimal ağrı".to_string(),
                        subtitle: "Tedavi öncesi ve sonrası".to_string(),
                        desc: "Temel unsur, bağışıklık sistemini güçlendirmek ve yan etkilerden kaçınmak için doğal yollarla kemik iyileşmesini teşvik etmektir.".to_string(),
                    },
                ],
            },
            service_block: ServiceBlockSection {
                eyebrow: "DİŞ HEKİMLERİ İÇİN".to_string(),
                title: "HİZMETLERİMİZ".to_string(),
                subtitle: "Ürünlerimiz kadar özel bir hizmet".to_string(),
                description: "SDS sadece bir ürün sağlayıcısı değildir. Her zaman yanınızdayız; değerli bilgiler sunar, eğitim etkinlikleri düzenler ve vakalarınızı planlamada sizi destekler.".to_string(),
                image_url: "/images/benefits-for-patients/Beratungsgespraech.jpg".to_string(),
                cta_label: "Şimdi bir SDS diş hekimi bulun".to_string(),
                cta_href: "mailto:info@swissdentalsolutions.com?subject=Request: Find dentist".to_string(),
            },
            slider: SliderSection {
                eyebrow: "MEMNUN HASTALAR".to_string(),
                testimonials: vec![
                    Testimonial {
                        img_src: "/images/benefits-for-patients/bergmann_johannes_600.jpg".to_string(),
                        name: "Johannes Bergmann".to_string(),
                        country: "Almanya".to_string(),
                        quote: "Ameliyattan sadece dört hafta sonra Engadin Kayak Maratonu'na katılabildim.".to_string(),
                        cta: "Devamını oku".to_string(),
                        href: "https://www.swiss-biohealth.com/en/testimonials/johannes-bergmann".to_string(),
                    },
                    Testimonial {
                        img_src: "/images/benefits-for-patients/BerryMartha_600.jpg".to_string(),
                        name: "Martha Berry".to_string(),
                        country: "ABD".to_string(),
                        quote: "Bir yıldan uzun süre sonra ilk defa yeniden tenis müsabakasında oynamaya başladım. Tam zamanlı işe geri döndüm ve sosyal hayatıma tamamen geri döndüm.".to_string(),
                        cta: "Devamını oku".to_string(),
                        href: "https://www.swiss-biohealth.com/en/testimonials/martha-berry".to_string(),
                    },
                    Testimonial {
                        img_src: "/images/benefits-for-patients/King-Dana-768x768.jpg".to_string(),
                        name: "Catherine Stewart".to_string(),
                        country: "İsviçre".to_string(),
                        quote: "Yeni dişlerim ve gülüşüm kesinlikle harika. Bu mükemmel gülüşü yaratmak için gösterilen hassasiyet ve özen gerçekten inanılmazdı.".to_string(),
                        cta: "Devamını oku".to_string(),
                        href: "https://www.swiss-biohealth.com/en/testimonials/catherine-stewart".to_string(),
                    },
                ],
            },
            pioneering_work: PioneeringWorkSection {
                eyebrow: "ÖNCÜ ÇALIŞMA".to_string(),
                title: "SWISS BIOHEALTH CLINIC".to_string(),
                subtitle: "Öncü bir tıbbi felsefe".to_string(),
                description: "Kreuzlingen’deki SWISS BIOHEALTH CLINIC, biyolojik diş hekimliği alanında mükemmeliyet merkezidir. Birinci sınıf tedaviler, modern teknolojiler ve bireysel odak sunar.".to_string(),
                image_url: "/images/benefits-for-patients/Klinik.jpg".to_string(),
                cta_label: "SWISS BIOHEALTH CLINIC".to_string(),
                cta_href: "https://www.swiss-biohealth.com/en".to_string(),
            },
            doctor: DoctorSection {
                name: "Karl Ulrich Volz".to_string(),
                title: "Dr. med. dent.".to_string(),
                description: "SDS SWISS DENTAL SOLUTIONS AG ve SWISS BIOHEALTH CLINIC'in kurucusu olarak yaklaşık 30.000 seramik implant yerleştirmiştir ve seramik implantoloji alanında dünya lideridir.".to_string(),
                image_url: "/images/product-lines/Dr-Ulrich-Volz.jpg".to_string(),
            },
        }
    }
}

/// Trimmed override value, falling back to the default when absent.
fn text_or(value: Option<&str>, fallback: &str) -> String {
    value.unwrap_or(fallback).trim().to_string()
}

fn merge_hero(overrides: Option<&HeroOverride>, base: &HeroSection) -> HeroSection {
    HeroSection {
        eyebrow: text_or(
            overrides.and_then(|o| o.eyebrow.as_deref()),
            &base.eyebrow,
        ),
        title: text_or(overrides.and_then(|o| o.title.as_deref()), &base.title),
        description: text_or(
            overrides.and_then(|o| o.description.as_deref()),
            &base.description,
        ),
        button_label: text_or(
            overrides.and_then(|o| o.button_label.as_deref()),
            &base.button_label,
        ),
        button_target: text_or(
            overrides.and_then(|o| o.button_target.as_deref()),
            &base.button_target,
        ),
        image_url: text_or(
            overrides.and_then(|o| o.image_url.as_deref()),
            &base.image_url,
        ),
    }
}

fn merge_why_ceramic(
    overrides: Option<&WhyCeramicOverride>,
    base: &WhyCeramicSection,
) -> WhyCeramicSection {
    let items = match overrides.and_then(|o| o.items.as_ref()) {
        // Merged item by item against the default at the same index; items
        // beyond the default list fall back to empty strings.
        Some(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let fallback = base.items.get(index);
                WhyCeramicItem {
                    icon: text_or(
                        item.icon.as_deref(),
                        fallback.map_or("", |f| f.icon.as_str()),
                    ),
                    title: text_or(
                        item.title.as_deref(),
                        fallback.map_or("", |f| f.title.as_str()),
                    ),
                    desc: text_or(
                        item.desc.as_deref(),
                        fallback.map_or("", |f| f.desc.as_str()),
                    ),
                    href: text_or(
                        item.href.as_deref(),
                        fallback.map_or("", |f| f.href.as_str()),
                    ),
                    cta_label: text_or(
                        item.cta_label.as_deref(),
                        fallback.map_or("", |f| f.cta_label.as_str()),
                    ),
                }
            })
            .collect(),
        None => base.items.clone(),
    };

    WhyCeramicSection {
        eyebrow: text_or(overrides.and_then(|o| o.eyebrow.as_deref()), &base.eyebrow),
        items,
    }
}

fn merge_ceramic_advantages(
    overrides: Option<&CeramicAdvantagesOverride>,
    base: &CeramicAdvantagesSection,
) -> CeramicAdvantagesSection {
    let cards = match overrides.and_then(|o| o.cards.as_ref()) {
        Some(cards) => cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let fallback = base.cards.get(index);
                AdvantageCard {
                    no: text_or(card.no.as_deref(), fallback.map_or("", |f| f.no.as_str())),
                    title: text_or(
                        card.title.as_deref(),
                        fallback.map_or("", |f| f.title.as_str()),
                    ),
                    subtitle: text_or(
                        card.subtitle.as_deref(),
                        fallback.map_or("", |f| f.subtitle.as_str()),
                    ),
                    desc: text_or(
                        card.desc.as_deref(),
                        fallback.map_or("", |f| f.desc.as_str()),
                    ),
                }
            })
            .collect(),
        None => base.cards.clone(),
    };

    CeramicAdvantagesSection {
        eyebrow: text_or(overrides.and_then(|o| o.eyebrow.as_deref()), &base.eyebrow),
        title: text_or(overrides.and_then(|o| o.title.as_deref()), &base.title),
        highlight: text_or(
            overrides.and_then(|o| o.highlight.as_deref()),
            &base.highlight,
        ),
        intro: text_or(overrides.and_then(|o| o.intro.as_deref()), &base.intro),
        cards,
    }
}

fn merge_service_block(
    overrides: Option<&ServiceBlockOverride>,
    base: &ServiceBlockSection,
) -> ServiceBlockSection {
    ServiceBlockSection {
        eyebrow: text_or(overrides.and_then(|o| o.eyebrow.as_deref()), &base.eyebrow),
        title: text_or(overrides.and_then(|o| o.title.as_deref()), &base.title),
        subtitle: text_or(
            overrides.and_then(|o| o.subtitle.as_deref()),
            &base.subtitle,
        ),
        description: text_or(
            overrides.and_then(|o| o.description.as_deref()),
            &base.description,
        ),
        image_url: text_or(
            overrides.and_then(|o| o.image_url.as_deref()),
            &base.image_url,
        ),
        cta_label: text_or(
            overrides.and_then(|o| o.cta_label.as_deref()),
            &base.cta_label,
        ),
        cta_href: text_or(
            overrides.and_then(|o| o.cta_href.as_deref()),
            &base.cta_href,
        ),
    }
}

fn merge_pioneering_work(
    overrides: Option<&ServiceBlockOverride>,
    base: &PioneeringWorkSection,
) -> PioneeringWorkSection {
    PioneeringWorkSection {
        eyebrow: text_or(overrides.and_then(|o| o.eyebrow.as_deref()), &base.eyebrow),
        title: text_or(overrides.and_then(|o| o.title.as_deref()), &base.title),
        subtitle: text_or(
            overrides.and_then(|o| o.subtitle.as_deref()),
            &base.subtitle,
        ),
        description: text_or(
            overrides.and_then(|o| o.description.as_deref()),
            &base.description,
        ),
        image_url: text_or(
            overrides.and_then(|o| o.image_url.as_deref()),
            &base.image_url,
        ),
        cta_label: text_or(
            overrides.and_then(|o| o.cta_label.as_deref()),
            &base.cta_label,
        ),
        cta_href: text_or(
            overrides.and_then(|o| o.cta_href.as_deref()),
            &base.cta_href,
        ),
    }
}

fn merge_slider(overrides: Option<&SliderOverride>, base: &SliderSection) -> SliderSection {
    let testimonials = match overrides.and_then(|o| o.testimonials.as_ref()) {
        Some(testimonials) => testimonials
            .iter()
            .enumerate()
            .map(|(index, testimonial)| {
                let fallback = base.testimonials.get(index);
                Testimonial {
                    img_src: text_or(
                        testimonial.img_src.as_deref(),
                        fallback.map_or("", |f| f.img_src.as_str()),
                    ),
                    name: text_or(
                        testimonial.name.as_deref(),
                        fallback.map_or("", |f| f.name.as_str()),
                    ),
                    country: text_or(
                        testimonial.country.as_deref(),
                        fallback.map_or("", |f| f.country.as_str()),
                    ),
                    quote: text_or(
                        testimonial.quote.as_deref(),
                        fallback.map_or("", |f| f.quote.as_str()),
                    ),
                    cta: text_or(
                        testimonial.cta.as_deref(),
                        fallback.map_or("", |f| f.cta.as_str()),
                    ),
                    href: text_or(
                        testimonial.href.as_deref(),
                        fallback.map_or("", |f| f.href.as_str()),
                    ),
                }
            })
            .collect(),
        None => base.testimonials.clone(),
    };

    SliderSection {
        eyebrow: text_or(overrides.and_then(|o| o.eyebrow.as_deref()), &base.eyebrow),
        testimonials,
    }
}

/// Reconcile a sparse override against the canonical default content.
///
/// Scalars fall back field by field; lists are merged by index and keep the
/// length the editor submitted. The result is always fully populated and a
/// fresh value, so repeated merges of the same override are stable.
pub fn merge_template_data(overrides: Option<&BenefitsTemplateOverride>) -> BenefitsTemplateData {
    let base = BenefitsTemplateData::default_content();
    let Some(overrides) = overrides else {
        return base;
    };

    BenefitsTemplateData {
        hero: merge_hero(overrides.hero.as_ref(), &base.hero),
        why_ceramic: merge_why_ceramic(overrides.why_ceramic.as_ref(), &base.why_ceramic),
        intro_text: IntroTextSection {
            text: text_or(
                overrides
                    .intro_text
                    .as_ref()
                    .and_then(|o| o.text.as_deref()),
                &base.intro_text.text,
            ),
        },
        section_image: SectionImage {
            image_url: text_or(
                overrides
                    .section_image
                    .as_ref()
                    .and_then(|o| o.image_url.as_deref()),
                &base.section_image.image_url,
            ),
            alt: text_or(
                overrides
                    .section_image
                    .as_ref()
                    .and_then(|o| o.alt.as_deref()),
                &base.section_image.alt,
            ),
        },
        ceramic_advantages: merge_ceramic_advantages(
            overrides.ceramic_advantages.as_ref(),
            &base.ceramic_advantages,
        ),
        service_block: merge_service_block(overrides.service_block.as_ref(), &base.service_block),
        slider: merge_slider(overrides.slider.as_ref(), &base.slider),
        pioneering_work: merge_pioneering_work(
            overrides.pioneering_work.as_ref(),
            &base.pioneering_work,
        ),
        doctor: DoctorSection {
            name: text_or(
                overrides.doctor.as_ref().and_then(|o| o.name.as_deref()),
                &base.doctor.name,
            ),
            title: text_or(
                overrides.doctor.as_ref().and_then(|o| o.title.as_deref()),
                &base.doctor.title,
            ),
            description: text_or(
                overrides
                    .doctor
                    .as_ref()
                    .and_then(|o| o.description.as_deref()),
                &base.doctor.description,
            ),
            image_url: text_or(
                overrides
                    .doctor
                    .as_ref()
                    .and_then(|o| o.image_url.as_deref()),
                &base.doctor.image_url,
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_without_overrides_returns_the_full_default() {
        let merged = merge_template_data(None);
        assert_eq!(merged, BenefitsTemplateData::default_content());
    }

    #[test]
    fn merge_with_empty_override_returns_the_full_default() {
        let merged = merge_template_data(Some(&BenefitsTemplateOverride::default()));
        assert_eq!(merged, BenefitsTemplateData::default_content());
    }

    #[test]
    fn scalar_overrides_fall_back_field_by_field() {
        let overrides = BenefitsTemplateOverride {
            hero: Some(HeroOverride {
                title: Some("  Custom Title  ".to_string()),
                ..HeroOverride::default()
            }),
            ..BenefitsTemplateOverride::default()
        };

        let merged = merge_template_data(Some(&overrides));
        let base = BenefitsTemplateData::default_content();

        assert_eq!(merged.hero.title, "Custom Title");
        assert_eq!(merged.hero.eyebrow, base.hero.eyebrow);
        assert_eq!(merged.doctor, base.doctor);
        assert_eq!(merged.slider, base.slider);
    }

    #[test]
    fn list_items_fall_back_to_the_default_at_the_same_index() {
        let overrides = BenefitsTemplateOverride {
            why_ceramic: Some(WhyCeramicOverride {
                eyebrow: None,
                items: Some(vec![WhyCeramicItemOverride {
                    title: Some("Only the title".to_string()),
                    ..WhyCeramicItemOverride::default()
                }]),
            }),
            ..BenefitsTemplateOverride::default()
        };

        let merged = merge_template_data(Some(&overrides));
        let base = BenefitsTemplateData::default_content();

        assert_eq!(merged.why_ceramic.items.len(), 1);
        assert_eq!(merged.why_ceramic.items[0].title, "Only the title");
        assert_eq!(merged.why_ceramic.items[0].icon, base.why_ceramic.items[0].icon);
        assert_eq!(merged.why_ceramic.items[0].href, base.why_ceramic.items[0].href);
    }

    #[test]
    fn list_items_beyond_the_default_length_fall_back_to_empty_strings() {
        let card = |title: &str| AdvantageCardOverride {
            title: Some(title.to_string()),
            ..AdvantageCardOverride::default()
        };
        let cards: Vec<_> = (0..7).map(|i| card(&format!("Card {i}"))).collect();

        let overrides = BenefitsTemplateOverride {
            ceramic_advantages: Some(CeramicAdvantagesOverride {
                cards: Some(cards),
                ..CeramicAdvantagesOverride::default()
            }),
            ..BenefitsTemplateOverride::default()
        };

        let merged = merge_template_data(Some(&overrides));
        let base = BenefitsTemplateData::default_content();

        // The default has six cards; the seventh has nothing to inherit.
        assert_eq!(merged.ceramic_advantages.cards.len(), 7);
        assert_eq!(merged.ceramic_advantages.cards[2].subtitle, base.ceramic_advantages.cards[2].subtitle);
        assert_eq!(merged.ceramic_advantages.cards[6].title, "Card 6");
        assert_eq!(merged.ceramic_advantages.cards[6].subtitle, "");
        assert_eq!(merged.ceramic_advantages.cards[6].no, "");
    }

    #[test]
    fn shorter_lists_are_preserved_without_padding() {
        let overrides = BenefitsTemplateOverride {
            slider: Some(SliderOverride {
                eyebrow: None,
                testimonials: Some(vec![TestimonialOverride {
                    name: Some("Ada".to_string()),
                    ..TestimonialOverride::default()
                }]),
            }),
            ..BenefitsTemplateOverride::default()
        };

        let merged = merge_template_data(Some(&overrides));
        assert_eq!(merged.slider.testimonials.len(), 1);
        assert_eq!(merged.slider.testimonials[0].name, "Ada");
    }

    #[test]
    fn merge_is_idempotent() {
        let overrides = BenefitsTemplateOverride {
            hero: Some(HeroOverride {
                title: Some("Custom Title".to_string()),
                ..HeroOverride::default()
            }),
            ceramic_advantages: Some(CeramicAdvantagesOverride {
                cards: Some(vec![AdvantageCardOverride {
                    desc: Some("Short".to_string()),
                    ..AdvantageCardOverride::default()
                }]),
                ..CeramicAdvantagesOverride::default()
            }),
            ..BenefitsTemplateOverride::default()
        };

        let once = merge_template_data(Some(&overrides));

        // Feed the fully merged structure back in as an override.
        let as_value = serde_json::to_value(&once).expect("serializable template");
        let round_trip: BenefitsTemplateOverride =
            serde_json::from_value(as_value).expect("valid override shape");
        let twice = merge_template_data(Some(&round_trip));

        assert_eq!(once, twice);
    }

    #[test]
    fn merged_output_has_no_empty_required_fields_for_sparse_overrides() {
        let overrides = BenefitsTemplateOverride {
            doctor: Some(DoctorOverride {
                name: Some("Dr. Example".to_string()),
                ..DoctorOverride::default()
            }),
            ..BenefitsTemplateOverride::default()
        };

        let merged = merge_template_data(Some(&overrides));

        assert!(!merged.hero.title.is_empty());
        assert!(!merged.intro_text.text.is_empty());
        assert!(merged.why_ceramic.items.iter().all(|i| !i.title.is_empty()));
        assert!(merged.slider.testimonials.iter().all(|t| !t.quote.is_empty()));
        assert_eq!(merged.doctor.name, "Dr. Example");
    }
}
