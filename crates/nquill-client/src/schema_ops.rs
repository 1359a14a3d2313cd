//! # Schema Operations
//!
//! The executed counterparts of the core statement builders: each operation
//! renders a statement, runs it in the session, and maps the result tables
//! back through `nquill_core::introspect`.

use crate::error::{Error, Result};
use crate::gateway::GatewaySession;
use nquill_core::{
    AlterTag, CreateSpace, CreateTag, DeleteTag, DescribeTag, DropSpace, DropTag, FieldDef,
    Identifier, ShowSpaces, ShowTags, TtlDef, UseSpace, Vid, introspect, plan_alter,
};

/// What [`GatewaySession::sync_tag`] did to converge a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The tag did not exist and was created.
    Created,
    /// The tag existed but drifted; an ALTER was applied.
    Altered,
    /// The tag already matched the declaration.
    Unchanged,
}

impl GatewaySession {
    /// Names of the tags in the current space.
    pub async fn show_tags(&self) -> Result<Vec<String>> {
        let rs = self.execute_stmt(&ShowTags).await?;
        Ok(introspect::names(&rs.tables)?)
    }

    /// Introspect one tag into field definitions.
    pub async fn describe_tag(&self, name: &Identifier) -> Result<Vec<FieldDef>> {
        let rs = self.execute_stmt(&DescribeTag::new(name.clone())).await?;
        Ok(introspect::fields_from_describe(&rs.tables)?)
    }

    pub async fn create_tag(&self, stmt: &CreateTag) -> Result<()> {
        self.execute_stmt(stmt).await.map(drop)
    }

    /// Drop a tag, tolerating its absence.
    pub async fn drop_tag(&self, name: &Identifier) -> Result<()> {
        self.execute_stmt(&DropTag::new(name.clone())).await.map(drop)
    }

    /// Apply an ALTER TAG, after validating it renders a legal statement.
    pub async fn alter_tag(&self, stmt: &AlterTag) -> Result<()> {
        stmt.validate().map_err(Error::Schema)?;
        self.execute_stmt(stmt).await.map(drop)
    }

    /// Detach tags from one vertex.
    pub async fn delete_tag(&self, tags: Vec<Identifier>, vid: impl Into<Vid>) -> Result<()> {
        let stmt = DeleteTag::new(tags, vid)?;
        self.execute_stmt(&stmt).await.map(drop)
    }

    /// Converge a live tag onto a declared schema.
    ///
    /// Creates the tag when it is absent; otherwise diffs the declaration
    /// against DESCRIBE TAG and applies the resulting ALTER, if any.
    pub async fn sync_tag(
        &self,
        name: &Identifier,
        declared: &[FieldDef],
        ttl: Option<TtlDef>,
    ) -> Result<SyncOutcome> {
        let existing = self.show_tags().await?;
        if !existing.iter().any(|tag| tag == name.as_str()) {
            let mut stmt = CreateTag::new(name.clone(), declared.to_vec());
            if let Some(ttl) = ttl {
                stmt = stmt.ttl(ttl);
            }
            self.create_tag(&stmt).await?;
            return Ok(SyncOutcome::Created);
        }

        let observed = self.describe_tag(name).await?;
        match plan_alter(name, declared, &observed) {
            Some(stmt) => {
                self.alter_tag(&stmt).await?;
                Ok(SyncOutcome::Altered)
            }
            None => Ok(SyncOutcome::Unchanged),
        }
    }

    /// Names of the spaces on the service.
    pub async fn show_spaces(&self) -> Result<Vec<String>> {
        let rs = self.execute_stmt(&ShowSpaces).await?;
        Ok(introspect::names(&rs.tables)?)
    }

    pub async fn create_space(&self, stmt: &CreateSpace) -> Result<()> {
        self.execute_stmt(stmt).await.map(drop)
    }

    /// Drop a space, tolerating its absence.
    pub async fn drop_space(&self, name: &Identifier) -> Result<()> {
        self.execute_stmt(&DropSpace::new(name.clone()))
            .await
            .map(drop)
    }

    /// Switch the session to a space.
    pub async fn use_space(&self, name: &Identifier) -> Result<()> {
        self.execute_stmt(&UseSpace::new(name.clone())).await.map(drop)
    }
}
