use pretty_assertions::assert_eq;
use typegen_core::{
    generate_modules, AppResult, Document, EndpointDescriptor, EndpointRenderer, FallbackType,
    GeneratorConfig, ModuleKind, TidyFormatter,
};

const HEADER: &str = "/* This file has been automatically generated */\n/* eslint-disable */\n\n";

const PETSTORE: &str = r#"
openapi: 3.0.3
info:
  title: Pets
  version: 1.0.0
paths:
  /pets/{petId}:
    $ref: '#/components/pathItems/PetById'
  /pets:
    parameters:
      - $ref: '#/components/parameters/Limit'
    get:
      parameters:
        - name: tag
          in: query
          schema:
            type: string
      responses:
        '200':
          description: ok
          content:
            application/json:
              schema:
                type: array
                items:
                  $ref: '#/components/schemas/Pet'
    post:
      requestBody:
        required: true
        content:
          application/json:
            schema:
              $ref: '#/components/schemas/NewPet'
      responses:
        '201':
          description: created
components:
  parameters:
    Limit:
      name: limit
      in: query
      required: true
      schema:
        type: integer
  pathItems:
    PetById:
      parameters:
        - name: petId
          in: path
          required: true
          schema:
            type: integer
      get:
        responses:
          '200':
            description: ok
            content:
              application/json:
                schema:
                  $ref: '#/components/schemas/Pet'
  schemas:
    Pet:
      allOf:
        - $ref: '#/components/schemas/NewPet'
        - type: object
          properties:
            id:
              type: integer
    NewPet:
      type: object
      properties:
        name:
          type: string
        status:
          type: string
          enum: [available, sold]
        legacyCode:
          type: string
          deprecated: true
        nickname:
          type: string
          x-nullable: true
"#;

/// Renders descriptors as a call table, the way a client template would.
struct TableRenderer;

impl EndpointRenderer for TableRenderer {
    fn render_endpoint(&self, e: &EndpointDescriptor) -> AppResult<String> {
        Ok(format!(
            "  {}: (path: {}, params: {}, body: {}) => {},",
            e.method, e.path_type, e.params_type, e.request_type, e.response_type
        ))
    }

    fn render_module(&self, content: &str) -> AppResult<String> {
        Ok(format!("export const endpoints = [\n{}\n];", content))
    }
}

fn compile(yaml: &str, renderer: Option<&dyn EndpointRenderer>) -> typegen_core::ModuleMap {
    let doc = Document::from_yaml(yaml).unwrap();
    generate_modules(&doc, &GeneratorConfig::default(), renderer, &TidyFormatter).unwrap()
}

#[test]
fn test_petstore_modules() {
    let modules = compile(PETSTORE, Some(&TableRenderer));

    let kinds: Vec<_> = modules.keys().copied().collect();
    assert_eq!(
        kinds,
        vec![
            ModuleKind::Schemas,
            ModuleKind::Params,
            ModuleKind::Endpoints,
            ModuleKind::Barrel
        ]
    );

    assert_eq!(
        modules[&ModuleKind::Schemas],
        format!(
            "{}{}",
            HEADER,
            "export type NewPet = { /** @deprecated */ legacyCode: string; name: string; nickname: (string | null); status: ('available' | 'sold'); };\n\
             \n\
             export type Pet = (NewPet & { id: number; });\n"
        )
    );

    assert_eq!(
        modules[&ModuleKind::Params],
        format!(
            "{}{}",
            HEADER,
            "import * as s from './schemas';\n\
             \n\
             export type GetPetsParams = { limit: number; tag?: (string | null); };\n\
             \n\
             export type PostPetsParams = { limit: number; };\n"
        )
    );

    assert_eq!(
        modules[&ModuleKind::Endpoints],
        format!(
            "{}{}",
            HEADER,
            "import * as s from './schemas';\n\
             import * as p from './params';\n\
             \n\
             export const endpoints = [\n\
             \x20 get: (path: '/pets', params: p.GetPetsParams, body: never) => s.Pet[],\n\
             \x20 post: (path: '/pets', params: p.PostPetsParams, body: s.NewPet) => never,\n\
             \x20 get: (path: `/pets/${number}`, params: {}, body: never) => s.Pet,\n\
             ];\n"
        )
    );

    assert_eq!(
        modules[&ModuleKind::Barrel],
        format!(
            "{}{}",
            HEADER,
            "export * from './endpoints';\nexport * from './params';\nexport * from './schemas';\n"
        )
    );
}

#[test]
fn test_without_renderer_no_endpoints_module() {
    let modules = compile(PETSTORE, None);
    assert!(!modules.contains_key(&ModuleKind::Endpoints));
    assert!(modules[&ModuleKind::Barrel].ends_with(
        "export * from './params';\nexport * from './schemas';\n"
    ));
}

#[test]
fn test_no_component_schemas_means_no_schema_namespace() {
    let modules = compile(
        r#"
paths:
  /items/{id}:
    get:
      parameters:
        - name: id
          in: path
          required: true
          schema:
            type: integer
        - name: page
          in: query
          schema:
            type: integer
      responses:
        '200':
          content:
            application/json:
              schema:
                type: object
                additionalProperties:
                  type: string
"#,
        Some(&TableRenderer),
    );

    assert!(!modules.contains_key(&ModuleKind::Schemas));
    for text in modules.values() {
        assert!(!text.contains("from './schemas'"));
    }

    assert_eq!(
        modules[&ModuleKind::Params],
        format!(
            "{}export type GetItemsIdParams = {{ page?: (number | null); }};\n",
            HEADER
        )
    );
    assert!(modules[&ModuleKind::Endpoints].contains(
        "get: (path: `/items/${number}`, params: p.GetItemsIdParams, body: never) => Record<string, string>,"
    ));
}

#[test]
fn test_fallback_type_is_configurable() {
    let doc = Document::from_yaml(
        r#"
components:
  schemas:
    Anything: {}
    Flag: true
"#,
    )
    .unwrap();

    let config = GeneratorConfig {
        fallback_type: FallbackType::Never,
        ..GeneratorConfig::default()
    };
    let modules = generate_modules(&doc, &config, None, &TidyFormatter).unwrap();
    assert_eq!(
        modules[&ModuleKind::Schemas],
        format!(
            "{}export type Anything = never;\n\nexport type Flag = never;\n",
            HEADER
        )
    );
}

#[test]
fn test_generation_is_deterministic() {
    let first = compile(PETSTORE, Some(&TableRenderer));
    let second = compile(PETSTORE, Some(&TableRenderer));
    assert_eq!(first, second);
}

#[test]
fn test_cyclic_schemas_terminate() {
    let modules = compile(
        r#"
components:
  schemas:
    Tree:
      type: object
      properties:
        children:
          type: array
          items:
            $ref: '#/components/schemas/Tree'
        parent:
          $ref: '#/components/schemas/Forest'
    Forest:
      type: array
      items:
        $ref: '#/components/schemas/Tree'
"#,
        None,
    );
    assert_eq!(
        modules[&ModuleKind::Schemas],
        format!(
            "{}export type Forest = Tree[];\n\nexport type Tree = {{ children: Tree[]; parent: Forest; }};\n",
            HEADER
        )
    );
}

#[test]
fn test_keyword_named_properties_survive() {
    let modules = compile(
        r#"
components:
  schemas:
    Rule:
      type: object
      properties:
        const:
          type: string
        id:
          type: integer
    Flags:
      type: object
      properties:
        x-nullable:
          type: boolean
        id:
          type: integer
"#,
        None,
    );
    assert_eq!(
        modules[&ModuleKind::Schemas],
        format!(
            "{}export type Flags = {{ id: number; 'x-nullable': boolean; }};\n\nexport type Rule = {{ const: string; id: number; }};\n",
            HEADER
        )
    );
}
