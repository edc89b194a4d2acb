use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Gene vocabulary (populated by the bulk import path)
        manager
            .create_table(
                Table::create()
                    .table(Genes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Genes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Genes::StandardName).string())
                    .col(ColumnDef::new(Genes::SystematicName).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MlModels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MlModels::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MlModels::Title)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(MlModels::OrganismId).integer().not_null())
                    .col(
                        ColumnDef::new(MlModels::DirectedG2gEdge)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Nodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Nodes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Nodes::Name).string().not_null())
                    .col(ColumnDef::new(Nodes::MlmodelId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_nodes_mlmodel_id")
                            .from(Nodes::Table, Nodes::MlmodelId)
                            .to(MlModels::Table, MlModels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Participations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Participations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Participations::NodeId).integer().not_null())
                    .col(ColumnDef::new(Participations::GeneId).integer().not_null())
                    .col(ColumnDef::new(Participations::Weight).double())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_participations_node_id")
                            .from(Participations::Table, Participations::NodeId)
                            .to(Nodes::Table, Nodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_participations_gene_id")
                            .from(Participations::Table, Participations::GeneId)
                            .to(Genes::Table, Genes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_participations_node_gene")
                    .table(Participations::Table)
                    .col(Participations::NodeId)
                    .col(Participations::GeneId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Edges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Edges::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Edges::Gene1Id).integer().not_null())
                    .col(ColumnDef::new(Edges::Gene2Id).integer().not_null())
                    .col(ColumnDef::new(Edges::MlmodelId).integer().not_null())
                    .col(ColumnDef::new(Edges::Weight).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_edges_gene1_id")
                            .from(Edges::Table, Edges::Gene1Id)
                            .to(Genes::Table, Genes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_edges_gene2_id")
                            .from(Edges::Table, Edges::Gene2Id)
                            .to(Genes::Table, Genes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_edges_mlmodel_id")
                            .from(Edges::Table, Edges::MlmodelId)
                            .to(MlModels::Table, MlModels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One edge per gene pair per model; cross-model pairs stay distinct rows.
        manager
            .create_index(
                Index::create()
                    .name("idx_edges_gene_pair_mlmodel")
                    .table(Edges::Table)
                    .col(Edges::Gene1Id)
                    .col(Edges::Gene2Id)
                    .col(Edges::MlmodelId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Experiments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiments::Accession)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Experiments::Name).string().not_null())
                    .col(ColumnDef::new(Experiments::Description).text())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Samples::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Samples::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Samples::Name).string().not_null())
                    .col(ColumnDef::new(Samples::MlDataSource).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExperimentSamples::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExperimentSamples::ExperimentAccession)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExperimentSamples::SampleId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ExperimentSamples::ExperimentAccession)
                            .col(ExperimentSamples::SampleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experiment_samples_experiment")
                            .from(
                                ExperimentSamples::Table,
                                ExperimentSamples::ExperimentAccession,
                            )
                            .to(Experiments::Table, Experiments::Accession)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experiment_samples_sample")
                            .from(ExperimentSamples::Table, ExperimentSamples::SampleId)
                            .to(Samples::Table, Samples::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Activities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Activities::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Activities::SampleId).integer().not_null())
                    .col(ColumnDef::new(Activities::NodeId).integer().not_null())
                    .col(ColumnDef::new(Activities::Value).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activities_sample_id")
                            .from(Activities::Table, Activities::SampleId)
                            .to(Samples::Table, Samples::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activities_node_id")
                            .from(Activities::Table, Activities::NodeId)
                            .to(Nodes::Table, Nodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_activities_sample_node")
                    .table(Activities::Table)
                    .col(Activities::SampleId)
                    .col(Activities::NodeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AnnotationTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AnnotationTypes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AnnotationTypes::Typename)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(AnnotationTypes::Description).text())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SampleAnnotations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SampleAnnotations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SampleAnnotations::SampleId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SampleAnnotations::AnnotationTypeId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SampleAnnotations::Text).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sample_annotations_sample_id")
                            .from(SampleAnnotations::Table, SampleAnnotations::SampleId)
                            .to(Samples::Table, Samples::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sample_annotations_annotation_type_id")
                            .from(
                                SampleAnnotations::Table,
                                SampleAnnotations::AnnotationTypeId,
                            )
                            .to(AnnotationTypes::Table, AnnotationTypes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The pivot export relies on one value per (sample, type) pair.
        manager
            .create_index(
                Index::create()
                    .name("idx_sample_annotations_sample_type")
                    .table(SampleAnnotations::Table)
                    .col(SampleAnnotations::SampleId)
                    .col(SampleAnnotations::AnnotationTypeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SampleAnnotations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AnnotationTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Activities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ExperimentSamples::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Samples::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Experiments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Edges::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Participations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Nodes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MlModels::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Genes::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Iden)]
enum Genes {
    Table,
    Id,
    StandardName,
    SystematicName,
}

#[derive(Iden)]
enum MlModels {
    Table,
    Id,
    Title,
    OrganismId,
    DirectedG2gEdge,
}

#[derive(Iden)]
enum Nodes {
    Table,
    Id,
    Name,
    MlmodelId,
}

#[derive(Iden)]
enum Participations {
    Table,
    Id,
    NodeId,
    GeneId,
    Weight,
}

#[derive(Iden)]
enum Edges {
    Table,
    Id,
    Gene1Id,
    Gene2Id,
    MlmodelId,
    Weight,
}

#[derive(Iden)]
enum Experiments {
    Table,
    Accession,
    Name,
    Description,
}

#[derive(Iden)]
enum Samples {
    Table,
    Id,
    Name,
    MlDataSource,
}

#[derive(Iden)]
enum ExperimentSamples {
    Table,
    ExperimentAccession,
    SampleId,
}

#[derive(Iden)]
enum Activities {
    Table,
    Id,
    SampleId,
    NodeId,
    Value,
}

#[derive(Iden)]
enum AnnotationTypes {
    Table,
    Id,
    Typename,
    Description,
}

#[derive(Iden)]
enum SampleAnnotations {
    Table,
    Id,
    SampleId,
    AnnotationTypeId,
    Text,
}
