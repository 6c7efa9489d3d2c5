use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    data::models::{envelope_model::parse_envelope, profile_image_model::ProfileImageModel},
    entities::RetailerProfile,
    errors::{InvalidJson, MissingRecordId},
};

use super::utils::{non_empty, read_payload};

#[async_trait]
pub(crate) trait ProfileJsonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<RetailerProfile, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<RetailerProfile, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProfile {
    #[serde(alias = "_id", alias = "retailerId")]
    id: Option<String>,
    #[serde(alias = "storeName", alias = "name")]
    shop_name: Option<String>,
    owner_name: Option<String>,
    #[serde(alias = "mobile", alias = "phoneNumber")]
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    #[serde(alias = "image", alias = "profilePic")]
    profile_image: Option<String>,
}

pub(crate) struct ProfileJsonDatasourceImpl {
    unwrap_double_encoded_images: bool,
}

impl ProfileJsonDatasourceImpl {
    pub(crate) fn new(unwrap_double_encoded_images: bool) -> Self {
        Self {
            unwrap_double_encoded_images,
        }
    }
}

#[async_trait]
impl ProfileJsonDatasource for ProfileJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<RetailerProfile, ServerError> {
        let raw: RawProfile =
            parse_envelope(s).map_err(|e| InvalidJson::with_debug("retailer profile", &e))?;
        let id = non_empty(raw.id).ok_or_else(|| MissingRecordId::new("Retailer profile", 0))?;
        let profile_image = non_empty(raw.profile_image)
            .map(|image| ProfileImageModel::decode(&image, self.unwrap_double_encoded_images))
            .transpose()?
            .map(|model| model.0);
        debug!(
            retailer = %id,
            has_image = profile_image.is_some(),
            "decoded retailer profile"
        );
        Ok(RetailerProfile {
            shop_name: non_empty(raw.shop_name).unwrap_or_default(),
            id,
            owner_name: non_empty(raw.owner_name),
            phone: non_empty(raw.phone),
            email: non_empty(raw.email),
            address: non_empty(raw.address),
            profile_image,
        })
    }

    async fn from_file<P>(&self, path: P) -> Result<RetailerProfile, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.from_string(&read_payload(path).await?)
    }
}
