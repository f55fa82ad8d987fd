use std::path::Path;

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::descriptor::DescriptorFile;

/// Memory-maps a descriptor file and parses it.
pub struct DescriptorLoader {
  file: AsyncMmapFile,
}

impl DescriptorLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("failed to open descriptor `{}`", path.display()))?;
    Ok(Self { file })
  }

  pub fn parse(&self) -> anyhow::Result<DescriptorFile> {
    Ok(DescriptorFile::from_slice(self.file.as_slice())?)
  }
}

pub async fn load_descriptor(path: &Path) -> anyhow::Result<DescriptorFile> {
  DescriptorLoader::open(path).await?.parse()
}
