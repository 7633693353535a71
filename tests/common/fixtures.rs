//! Fixture feeds and temporary workspaces.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// Listings feed shaped like the built-in pipeline expects.
pub const LISTINGS_XML: &str = include_str!("../fixtures/listings.xml");

/// Rows the built-in pipeline produces for [`LISTINGS_XML`].
pub const LISTINGS_CSV: &str = "M-4,CLAIMS,2016-01-01 00:00:00,4 Elm St,\"1,250,000\",5,3,1,,\"Dishwasher,Range\",,Pool AND spa\r\n\
M-1,CLAIMS,2016-03-01 10:00:00,1 Oak Ave,350000,3,2,0,1,Refrigerator,\"Kitchen,Den,Office\",Bright kitchen and large yard\r\n";

/// Temporary directory holding a feed file.
#[allow(dead_code)]
pub struct FeedWorkspace {
    dir: TempDir,
    feed: PathBuf,
}

#[allow(dead_code)]
impl FeedWorkspace {
    pub fn new() -> Self {
        Self::with_feed(LISTINGS_XML)
    }

    pub fn with_feed(xml: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let feed = dir.path().join("feed.xml");
        fs::write(&feed, xml).unwrap();
        Self { dir, feed }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn feed(&self) -> &Path {
        &self.feed
    }

    /// Write `content` to `name` inside the workspace.
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn output(&self) -> PathBuf {
        self.dir.path().join("output.csv")
    }
}
