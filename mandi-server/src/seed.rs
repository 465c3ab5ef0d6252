//! Demo Seed Data
//!
//! 演示数据初始化 - 预置账号、农户挂牌、消费者目录
//!
//! Two persisted datasets are seeded on startup, both idempotently:
//! demo accounts (skipped per-account when the email already exists) and
//! demo farmer listings (skipped entirely when any listing exists). The
//! consumer catalog is static reference data and is never persisted.
//!
//! | 账号 | 角色 | 密码 |
//! |------|------|------|
//! | farmer@demo.com | farmer | demo123 |
//! | fpo@demo.com | fpo | demo123 |
//! | processor@demo.com | processor | demo123 |
//! | startup@demo.com | startup | demo123 |
//! | retailer@demo.com | retailer | demo123 |
//! | consumer@demo.com | consumer | demo123 |

use crate::core::{AppError, AppResult};
use crate::db::models::{
    Category, Documents, FarmerProduct, Product, Seller, SupplyChainStage, User,
};
use crate::db::repository::{FarmerProductRepository, UserRepository};
use crate::store::RecordStore;
use chrono::{Duration, Utc};
use shared::{UserRole, VerificationStatus};

const DEMO_PASSWORD: &str = "demo123";

/// Seed demo accounts and farmer listings into the store
pub fn initialize(store: &RecordStore) -> AppResult<()> {
    seed_demo_accounts(store)?;
    seed_farmer_listings(store)?;
    Ok(())
}

// =============================================================================
// Demo accounts
// =============================================================================

struct DemoAccount {
    email: &'static str,
    name: &'static str,
    phone: &'static str,
    role: UserRole,
    business_name: Option<&'static str>,
    gst_number: Option<&'static str>,
    address: &'static str,
    city: &'static str,
    state: &'static str,
    pincode: &'static str,
    documents: Documents,
}

fn demo_accounts() -> Vec<DemoAccount> {
    vec![
        DemoAccount {
            email: "farmer@demo.com",
            name: "Demo Farmer",
            phone: "9876543210",
            role: UserRole::Farmer,
            business_name: Some("Green Fields Farm"),
            gst_number: None,
            address: "Village Keshavpur",
            city: "Dharwad",
            state: "Karnataka",
            pincode: "580001",
            documents: Documents {
                aadhaar: Some("AADHAAR_VERIFIED".into()),
                land_documents: Some("LAND_DOC_VERIFIED".into()),
                ..Default::default()
            },
        },
        DemoAccount {
            email: "fpo@demo.com",
            name: "Demo FPO Manager",
            phone: "9876543211",
            role: UserRole::Fpo,
            business_name: Some("Organic Farmers FPO"),
            gst_number: None,
            address: "FPO Complex, Main Road",
            city: "Belgaum",
            state: "Karnataka",
            pincode: "590001",
            documents: Documents {
                business_license: Some("FPO_LICENSE_VERIFIED".into()),
                gst: Some("GST_VERIFIED".into()),
                ..Default::default()
            },
        },
        DemoAccount {
            email: "processor@demo.com",
            name: "Demo Processor",
            phone: "9876543212",
            role: UserRole::Processor,
            business_name: Some("Millet Processing Industries"),
            gst_number: Some("29ABCDE1234F1Z5"),
            address: "Industrial Area",
            city: "Hubli",
            state: "Karnataka",
            pincode: "580020",
            documents: Documents {
                business_license: Some("PROCESSOR_LICENSE_VERIFIED".into()),
                gst: Some("GST_VERIFIED".into()),
                fssai: Some("FSSAI_VERIFIED".into()),
                ..Default::default()
            },
        },
        DemoAccount {
            email: "startup@demo.com",
            name: "Demo Startup",
            phone: "9876543213",
            role: UserRole::Startup,
            business_name: Some("HealthyMillet Innovations"),
            gst_number: Some("29XYZAB5678G1Z9"),
            address: "Tech Park, Brigade Road",
            city: "Bangalore",
            state: "Karnataka",
            pincode: "560001",
            documents: Documents {
                business_license: Some("STARTUP_LICENSE_VERIFIED".into()),
                gst: Some("GST_VERIFIED".into()),
                fssai: Some("FSSAI_VERIFIED".into()),
                ..Default::default()
            },
        },
        DemoAccount {
            email: "retailer@demo.com",
            name: "Demo Retailer",
            phone: "9876543214",
            role: UserRole::Retailer,
            business_name: Some("Organic Mart"),
            gst_number: Some("29PQRST9012H1Z3"),
            address: "MG Road",
            city: "Mysore",
            state: "Karnataka",
            pincode: "570001",
            documents: Documents {
                business_license: Some("RETAIL_LICENSE_VERIFIED".into()),
                gst: Some("GST_VERIFIED".into()),
                fssai: Some("FSSAI_VERIFIED".into()),
                ..Default::default()
            },
        },
        DemoAccount {
            email: "consumer@demo.com",
            name: "Demo Consumer",
            phone: "9876543215",
            role: UserRole::Consumer,
            business_name: None,
            gst_number: None,
            address: "123 Main Street",
            city: "Bangalore",
            state: "Karnataka",
            pincode: "560001",
            documents: Documents::default(),
        },
    ]
}

/// Insert any demo account whose email is not yet registered
///
/// Demo accounts skip the verification workflow and land pre-approved.
fn seed_demo_accounts(store: &RecordStore) -> AppResult<()> {
    let users = UserRepository::new(store.clone());

    // One hash shared across demo accounts keeps startup fast; real
    // registrations always hash individually.
    let password_hash = User::hash_password(DEMO_PASSWORD)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {}", e)))?;

    let mut seeded = 0;
    for account in demo_accounts() {
        if users.email_exists(account.email)? {
            continue;
        }
        users.create(User {
            id: shared::util::generate_id("user"),
            email: account.email.into(),
            password_hash: password_hash.clone(),
            name: account.name.into(),
            phone: account.phone.into(),
            role: account.role,
            business_name: account.business_name.map(Into::into),
            gst_number: account.gst_number.map(Into::into),
            address: Some(account.address.into()),
            city: Some(account.city.into()),
            state: Some(account.state.into()),
            pincode: Some(account.pincode.into()),
            documents: account.documents,
            is_verified: true,
            verification_status: VerificationStatus::Approved,
            created_at: shared::util::now_iso(),
            profile_image: None,
        })?;
        seeded += 1;
    }

    if seeded > 0 {
        tracing::info!(count = seeded, "Demo accounts seeded");
    }
    Ok(())
}

// =============================================================================
// Demo farmer listings
// =============================================================================

fn days_ago(days: i64) -> String {
    (Utc::now() - Duration::days(days)).to_rfc3339()
}

fn stage(stage: &str, days: i64, verified_by: &str, status: &str) -> SupplyChainStage {
    SupplyChainStage {
        stage: stage.into(),
        timestamp: days_ago(days),
        verified_by: verified_by.into(),
        status: status.into(),
    }
}

fn demo_farmer_listings() -> Vec<FarmerProduct> {
    vec![
        FarmerProduct {
            id: "prod_farmer1_001".into(),
            name: "Kangni".into(),
            category: "millets".into(),
            quantity_kg: 1500,
            price_per_kg: 70.0,
            description: "Freshly harvested foxtail millet grains. Unprocessed, directly from \
                          farm. Naturally grown without chemical fertilizers. Moisture content: \
                          12%. Ready for processing or milling."
                .into(),
            farmer_id: "farmer_demo_1".into(),
            farmer_name: "Tusharkanta Behera".into(),
            farmer_phone: "9876543210".into(),
            location: "Rayagada, Odisha".into(),
            village: Some("Kalyansinghpur".into()),
            district: Some("Rayagada".into()),
            state: Some("Odisha".into()),
            listed_date: shared::util::now_iso(),
            image_url: Some("/products/kangani.webp".into()),
            organic: true,
            certifications: vec!["Organic India".into()],
            ledger_verified: true,
            ledger_hash: Some(
                "0x7f9fade1c0d57a7af66ab4ead79fade1c0d57a7af66ab4ead7c2c2eb7b11a91385".into(),
            ),
            block_number: Some("#847562".into()),
            supply_chain: vec![
                stage("Harvesting", 2, "Tusharkanta Behera (Farmer)", "Completed"),
                stage("Quality Check", 1, "Mandi Quality Team", "Verified"),
                stage("Listed on Platform", 0, "Mandi Ledger", "Active"),
            ],
        },
        FarmerProduct {
            id: "prod_farmer2_001".into(),
            name: "Bajra".into(),
            category: "millets".into(),
            quantity_kg: 2500,
            price_per_kg: 45.0,
            description: "Fresh pearl millet grains harvested this season. Sun-dried, cleaned \
                          and ready for bulk purchase. High protein content. Perfect for flour \
                          milling or cattle feed."
                .into(),
            farmer_id: "farmer_demo_2".into(),
            farmer_name: "Suresh Patel".into(),
            farmer_phone: "9876543211".into(),
            location: "Jodhpur, Rajasthan".into(),
            village: Some("Bilara".into()),
            district: Some("Jodhpur".into()),
            state: Some("Rajasthan".into()),
            listed_date: shared::util::now_iso(),
            image_url: Some("/products/bajara.webp".into()),
            organic: false,
            certifications: vec![],
            ledger_verified: true,
            ledger_hash: Some(
                "0x4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b".into(),
            ),
            block_number: Some("#847589".into()),
            supply_chain: vec![
                stage("Harvesting", 3, "Suresh Patel (Farmer)", "Completed"),
                stage("Post-Harvest Processing", 2, "Local Processing Unit", "Completed"),
                stage("Quality Check", 1, "Mandi Quality Team", "Verified"),
                stage("Listed on Platform", 0, "Mandi Ledger", "Active"),
            ],
        },
        FarmerProduct {
            id: "prod_farmer3_001".into(),
            name: "Ragi".into(),
            category: "millets".into(),
            quantity_kg: 1800,
            price_per_kg: 55.0,
            description: "Unprocessed finger millet grains from my 5-acre farm. Rich calcium \
                          source. Traditional variety, no hybrid seeds. Freshly threshed and \
                          cleaned."
                .into(),
            farmer_id: "farmer_demo_3".into(),
            farmer_name: "Lakshmi Devi".into(),
            farmer_phone: "9876543212".into(),
            location: "Mandya, Karnataka".into(),
            village: Some("KR Pet".into()),
            district: Some("Mandya".into()),
            state: Some("Karnataka".into()),
            listed_date: shared::util::now_iso(),
            image_url: Some("/products/Ragii.webp".into()),
            organic: true,
            certifications: vec!["Organic Certified".into()],
            ledger_verified: true,
            ledger_hash: Some(
                "0x8f3c3f915f3260f67b7a9b8f9c29e9d90fa9f43a8b5ec7f3e4aa3e5eb7b27f89".into(),
            ),
            block_number: Some("#847601".into()),
            supply_chain: vec![
                stage("Organic Farm Harvesting", 4, "Lakshmi Devi (Farmer)", "Completed"),
                stage("Organic Certification", 3, "Organic India Certifier", "Certified"),
                stage("Quality Check", 1, "Mandi Quality Team", "Verified"),
                stage("Listed on Platform", 0, "Mandi Ledger", "Active"),
            ],
        },
        FarmerProduct {
            id: "prod_farmer4_001".into(),
            name: "Jowar".into(),
            category: "millets".into(),
            quantity_kg: 3000,
            price_per_kg: 40.0,
            description: "Fresh sorghum harvest from rain-fed agriculture. White variety \
                          grains. Clean, sun-dried, ready for wholesale. Bulk orders welcome!"
                .into(),
            farmer_id: "farmer_demo_4".into(),
            farmer_name: "Ramesh Yadav".into(),
            farmer_phone: "9876543213".into(),
            location: "Solapur, Maharashtra".into(),
            village: Some("Mohol".into()),
            district: Some("Solapur".into()),
            state: Some("Maharashtra".into()),
            listed_date: shared::util::now_iso(),
            image_url: Some("/products/jowar-atta.webp".into()),
            organic: false,
            certifications: vec![],
            ledger_verified: true,
            ledger_hash: Some(
                "0x2c7e9e4d7b3f8a9c1e5d6a4f8b2c9e1d3a7f5b8c4e6d9a2f7b5c8e1d4a6f9b3c".into(),
            ),
            block_number: Some("#847615".into()),
            supply_chain: vec![
                stage("Harvesting", 2, "Ramesh Yadav (Farmer)", "Completed"),
                stage("Quality Check", 1, "Mandi Quality Team", "Verified"),
                stage("Listed on Platform", 0, "Mandi Ledger", "Active"),
            ],
        },
        FarmerProduct {
            id: "prod_farmer1_002".into(),
            name: "Arhar Dal".into(),
            category: "pulses".into(),
            quantity_kg: 1200,
            price_per_kg: 90.0,
            description: "Freshly harvested pigeon peas (toor dal). Unpolished whole grains. \
                          Needs further processing. High yield variety. Good for dal mills."
                .into(),
            farmer_id: "farmer_demo_1".into(),
            farmer_name: "Tusharkanta Behera".into(),
            farmer_phone: "9876543210".into(),
            location: "Rayagada, Odisha".into(),
            village: Some("Kalyansinghpur".into()),
            district: Some("Rayagada".into()),
            state: Some("Odisha".into()),
            listed_date: shared::util::now_iso(),
            image_url: Some("/products/Daal.webp".into()),
            organic: true,
            certifications: vec!["Organic India".into()],
            ledger_verified: true,
            ledger_hash: Some(
                "0x1b4f8c3e9d2a7f5b8c4e6d9a2f7b5c8e1d4a6f9b3c2e7d5a8f1c4b6e9d2a7f5b".into(),
            ),
            block_number: Some("#847628".into()),
            supply_chain: vec![
                stage("Harvesting", 5, "Tusharkanta Behera (Farmer)", "Completed"),
                stage("Organic Certification", 4, "Organic India Certifier", "Certified"),
                stage("Quality Check", 2, "Mandi Quality Team", "Verified"),
                stage("Listed on Platform", 0, "Mandi Ledger", "Active"),
            ],
        },
        FarmerProduct {
            id: "prod_farmer3_002".into(),
            name: "Kutki".into(),
            category: "millets".into(),
            quantity_kg: 800,
            price_per_kg: 80.0,
            description: "Small grain little millet. Traditionally grown, pesticide-free. \
                          Excellent for diabetes management. Direct farm produce, needs \
                          dehulling."
                .into(),
            farmer_id: "farmer_demo_3".into(),
            farmer_name: "Lakshmi Devi".into(),
            farmer_phone: "9876543212".into(),
            location: "Mandya, Karnataka".into(),
            village: Some("KR Pet".into()),
            district: Some("Mandya".into()),
            state: Some("Karnataka".into()),
            listed_date: shared::util::now_iso(),
            image_url: Some("/products/Littlemillet.webp".into()),
            organic: true,
            certifications: vec!["Organic Certified".into()],
            ledger_verified: true,
            ledger_hash: Some(
                "0x9e3d7a5f2c8b4e6d9a1f7b5c8e2d4a6f9b3c7e5d8a1f4b6c9e2d7a5f8b4c6e9d".into(),
            ),
            block_number: Some("#847634".into()),
            supply_chain: vec![
                stage("Organic Farm Harvesting", 3, "Lakshmi Devi (Farmer)", "Completed"),
                stage("Organic Certification", 2, "Organic India Certifier", "Certified"),
                stage("Quality Check", 1, "Mandi Quality Team", "Verified"),
                stage("Listed on Platform", 0, "Mandi Ledger", "Active"),
            ],
        },
    ]
}

/// Insert demo farmer listings when none exist yet
fn seed_farmer_listings(store: &RecordStore) -> AppResult<()> {
    let listings = FarmerProductRepository::new(store.clone());
    if listings.count()? > 0 {
        return Ok(());
    }

    let mut seeded = 0;
    for listing in demo_farmer_listings() {
        listings.create(listing)?;
        seeded += 1;
    }
    tracing::info!(count = seeded, "Demo farmer listings seeded");
    Ok(())
}

// =============================================================================
// Consumer catalog (static reference data)
// =============================================================================

fn seller(id: &str, name: &str, location: &str) -> Seller {
    Seller {
        id: id.into(),
        name: name.into(),
        location: location.into(),
        verified: true,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// The twelve-product consumer catalog
pub fn consumer_catalog() -> Vec<Product> {
    vec![
        Product {
            id: "prod_1".into(),
            name: "Organic Foxtail Millet (Navane)".into(),
            description: "Premium quality organic foxtail millet, rich in iron and calcium. \
                          Perfect for diabetes management."
                .into(),
            price: 120.0,
            original_price: Some(150.0),
            discount: Some(20),
            image: "/products/Millet.png".into(),
            category: Category::Millets,
            stock: 50,
            rating: 4.8,
            reviews: 124,
            seller: seller("seller_1", "Kumar Organic Farms", "Karnataka"),
            certifications: strings(&["Organic", "FSSAI"]),
            tags: strings(&["Gluten-Free", "High Protein", "Diabetes Friendly"]),
            weight: "1 kg".into(),
            is_bestseller: true,
            is_organic: true,
            is_new: false,
        },
        Product {
            id: "prod_2".into(),
            name: "Premium Ragi Flour (Finger Millet)".into(),
            description: "Stone-ground ragi flour, excellent source of calcium. Ideal for \
                          making healthy rotis and dosas."
                .into(),
            price: 85.0,
            original_price: Some(100.0),
            discount: Some(15),
            image: "/products/Ragi.jpg".into(),
            category: Category::Flour,
            stock: 75,
            rating: 4.9,
            reviews: 256,
            seller: seller("seller_2", "Organic Valley FPO", "Tamil Nadu"),
            certifications: strings(&["Organic", "FSSAI", "India Organic"]),
            tags: strings(&["High Calcium", "Baby Food", "Energy Booster"]),
            weight: "500 g".into(),
            is_bestseller: true,
            is_organic: true,
            is_new: false,
        },
        Product {
            id: "prod_3".into(),
            name: "Little Millet (Samai)".into(),
            description: "Tiny powerhouse of nutrients. Perfect rice substitute for weight \
                          management."
                .into(),
            price: 95.0,
            original_price: None,
            discount: None,
            image: "/products/Littlemillet.webp".into(),
            category: Category::Millets,
            stock: 40,
            rating: 4.7,
            reviews: 89,
            seller: seller("seller_3", "Shree Anna Farms", "Andhra Pradesh"),
            certifications: strings(&["Organic", "FSSAI"]),
            tags: strings(&["Weight Loss", "Low GI", "Fiber Rich"]),
            weight: "1 kg".into(),
            is_bestseller: false,
            is_organic: true,
            is_new: true,
        },
        Product {
            id: "prod_4".into(),
            name: "Barnyard Millet (Sanwa)".into(),
            description: "Low-calorie millet perfect for fasting and diabetic diets. Quick \
                          cooking."
                .into(),
            price: 110.0,
            original_price: None,
            discount: None,
            image: "/products/Barnyard-Millet.webp".into(),
            category: Category::Millets,
            stock: 35,
            rating: 4.6,
            reviews: 67,
            seller: seller("seller_1", "Kumar Organic Farms", "Karnataka"),
            certifications: strings(&["Organic", "FSSAI"]),
            tags: strings(&["Fasting Food", "Low Calorie", "Quick Cook"]),
            weight: "1 kg".into(),
            is_bestseller: false,
            is_organic: true,
            is_new: false,
        },
        Product {
            id: "prod_5".into(),
            name: "Jowar Atta (Sorghum Flour)".into(),
            description: "Nutritious jowar flour for making soft rotis. Rich in antioxidants."
                .into(),
            price: 75.0,
            original_price: None,
            discount: None,
            image: "/products/jowar-atta.webp".into(),
            category: Category::Flour,
            stock: 60,
            rating: 4.8,
            reviews: 145,
            seller: seller("seller_4", "Madhya Farms", "Maharashtra"),
            certifications: strings(&["Organic", "FSSAI"]),
            tags: strings(&["Gluten-Free", "Heart Healthy", "Antioxidants"]),
            weight: "1 kg".into(),
            is_bestseller: true,
            is_organic: true,
            is_new: false,
        },
        Product {
            id: "prod_6".into(),
            name: "Ragi Ladoo (Healthy Snack)".into(),
            description: "Traditional homemade ragi ladoos with jaggery. Perfect energy snack \
                          for kids."
                .into(),
            price: 180.0,
            original_price: Some(220.0),
            discount: Some(18),
            image: "/products/ladu.jpg".into(),
            category: Category::Snacks,
            stock: 25,
            rating: 4.9,
            reviews: 312,
            seller: seller("seller_5", "Amma's Kitchen SHG", "Karnataka"),
            certifications: strings(&["FSSAI", "Homemade"]),
            tags: strings(&["No Preservatives", "Kids Favorite", "Energy Snack"]),
            weight: "250 g".into(),
            is_bestseller: true,
            is_organic: false,
            is_new: false,
        },
        Product {
            id: "prod_7".into(),
            name: "Mixed Millet Atta".into(),
            description: "Nutritious blend of 5 millets. Perfect for daily rotis and parathas."
                .into(),
            price: 140.0,
            original_price: None,
            discount: None,
            image: "/products/Mix-milet-atta.webp".into(),
            category: Category::Flour,
            stock: 45,
            rating: 4.7,
            reviews: 178,
            seller: seller("seller_2", "Organic Valley FPO", "Tamil Nadu"),
            certifications: strings(&["Organic", "FSSAI"]),
            tags: strings(&["Multi Grain", "Protein Rich", "Balanced Nutrition"]),
            weight: "1 kg".into(),
            is_bestseller: false,
            is_organic: true,
            is_new: false,
        },
        Product {
            id: "prod_8".into(),
            name: "Organic Toor Dal (Pigeon Pea)".into(),
            description: "Premium quality organic toor dal. Rich in protein and easy to digest."
                .into(),
            price: 160.0,
            original_price: None,
            discount: None,
            image: "/products/Daal.webp".into(),
            category: Category::Pulses,
            stock: 55,
            rating: 4.8,
            reviews: 203,
            seller: seller("seller_3", "Shree Anna Farms", "Andhra Pradesh"),
            certifications: strings(&["Organic", "FSSAI"]),
            tags: strings(&["High Protein", "Chemical Free", "Farm Fresh"]),
            weight: "1 kg".into(),
            is_bestseller: false,
            is_organic: true,
            is_new: false,
        },
        Product {
            id: "prod_9".into(),
            name: "Millet Cookies Combo Pack".into(),
            description: "Assorted healthy millet cookies - Ragi, Jowar, and Bajra flavors."
                .into(),
            price: 250.0,
            original_price: Some(300.0),
            discount: Some(17),
            image: "/products/Cookies.webp".into(),
            category: Category::Snacks,
            stock: 30,
            rating: 4.9,
            reviews: 287,
            seller: seller("seller_5", "Amma's Kitchen SHG", "Karnataka"),
            certifications: strings(&["FSSAI"]),
            tags: strings(&["Sugar Free", "Crispy", "Gift Pack"]),
            weight: "300 g".into(),
            is_bestseller: true,
            is_organic: false,
            is_new: false,
        },
        Product {
            id: "prod_10".into(),
            name: "Cold Pressed Groundnut Oil".into(),
            description: "Traditional wood-pressed groundnut oil. Rich aroma and nutrients."
                .into(),
            price: 280.0,
            original_price: None,
            discount: None,
            image: "/products/oil.webp".into(),
            category: Category::Oils,
            stock: 40,
            rating: 4.7,
            reviews: 156,
            seller: seller("seller_4", "Madhya Farms", "Maharashtra"),
            certifications: strings(&["Organic", "FSSAI", "Cold Pressed"]),
            tags: strings(&["Chemical Free", "Unrefined", "Traditional Method"]),
            weight: "1 L".into(),
            is_bestseller: false,
            is_organic: true,
            is_new: false,
        },
        Product {
            id: "prod_11".into(),
            name: "Healthy Breakfast Combo".into(),
            description: "Complete breakfast pack: Ragi flour, Mixed millet atta, and Foxtail \
                          millet."
                .into(),
            price: 320.0,
            original_price: Some(380.0),
            discount: Some(16),
            image: "/products/Healthy_Breakfast_Combo.webp".into(),
            category: Category::Combos,
            stock: 20,
            rating: 4.9,
            reviews: 198,
            seller: seller("seller_2", "Organic Valley FPO", "Tamil Nadu"),
            certifications: strings(&["Organic", "FSSAI"]),
            tags: strings(&["Value Pack", "Complete Nutrition", "Family Pack"]),
            weight: "3 kg".into(),
            is_bestseller: true,
            is_organic: true,
            is_new: false,
        },
        Product {
            id: "prod_12".into(),
            name: "Bajra Flour (Pearl Millet)".into(),
            description: "Fresh pearl millet flour. Excellent for winter diet and bone health."
                .into(),
            price: 90.0,
            original_price: None,
            discount: None,
            image: "/products/Atta.jpg".into(),
            category: Category::Flour,
            stock: 50,
            rating: 4.6,
            reviews: 132,
            seller: seller("seller_1", "Kumar Organic Farms", "Karnataka"),
            certifications: strings(&["Organic", "FSSAI"]),
            tags: strings(&["Winter Food", "Bone Health", "Energy Rich"]),
            weight: "1 kg".into(),
            is_bestseller: false,
            is_organic: true,
            is_new: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_twelve_products() {
        let catalog = consumer_catalog();
        assert_eq!(catalog.len(), 12);
        assert!(catalog.iter().all(|p| p.price > 0.0));
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let store = RecordStore::open_in_memory().unwrap();
        initialize(&store).unwrap();
        initialize(&store).unwrap();

        let users = UserRepository::new(store.clone());
        assert_eq!(users.find_all().unwrap().len(), 6);

        let listings = FarmerProductRepository::new(store);
        assert_eq!(listings.count().unwrap(), 6);
    }

    #[test]
    fn test_demo_login_works_after_seed() {
        let store = RecordStore::open_in_memory().unwrap();
        initialize(&store).unwrap();

        let users = UserRepository::new(store);
        let farmer = users.find_by_email("farmer@demo.com").unwrap().unwrap();
        assert!(farmer.is_verified);
        assert!(farmer.verify_password("demo123").unwrap());
    }
}
