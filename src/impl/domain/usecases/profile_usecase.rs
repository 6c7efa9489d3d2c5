use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::portal_repository_impl::JsonPortalRepository,
    domain::repositories::portal_repository::PortalRepository,
    entities::{PortalConfig, RetailerProfile},
};

#[async_trait]
pub trait ProfileUsecase: Send + Sync {
    fn from_string(&self, profile_json: &str) -> Result<RetailerProfile, ServerError>;

    async fn from_file<P>(&self, profile_json: P) -> Result<RetailerProfile, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct ProfileUsecaseImpl<
    R1 = JsonPortalRepository, // Default.
> where
    R1: PortalRepository,
{
    portal_repository: R1,
}

#[async_trait]
impl<R1: PortalRepository> ProfileUsecase for ProfileUsecaseImpl<R1> {
    fn from_string(&self, profile_json: &str) -> Result<RetailerProfile, ServerError> {
        self.portal_repository.profile_from_string(profile_json)
    }

    async fn from_file<P>(&self, profile_json: P) -> Result<RetailerProfile, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.portal_repository.profile_from_file(profile_json).await
    }
}

impl ProfileUsecaseImpl {
    pub(crate) fn new(config: &PortalConfig) -> Result<Self, ServerError> {
        Ok(ProfileUsecaseImpl {
            portal_repository: JsonPortalRepository::new(config)?,
        })
    }
}
