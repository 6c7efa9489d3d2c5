#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Webp,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileImage {
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetailerProfile {
    pub id: String,
    pub shop_name: String,
    pub owner_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub profile_image: Option<ProfileImage>,
}
