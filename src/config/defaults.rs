//! Built-in envelope content for the two merge profiles.

pub const DEFAULT_INPUT_DIR: &str = "postman-collections";
pub const DEFAULT_OUTPUT_FILE: &str = "CharacterNetwork-API-Collection.json";
pub const COLLECTION_NAME: &str = "CharacterNetwork API Collection";
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// 完整版檔名前綴 01- ~ 11-
pub const FULL_NUMBERED_SLOTS: u32 = 11;

pub const FULL_DESCRIPTION: &str = r#"## CharacterNetwork API文档

### 项目概述
- **版本**: v1.0.0
- **基础URL**: {{base_url}}
- **认证方式**: Session-based Authentication (Passport.js)
- **技术栈**: Express.js + TypeScript + PostgreSQL + Drizzle ORM

### 核心功能
- 用户认证和会话管理
- 小说信息管理和分类
- 角色信息管理和关系建立
- 外部书籍信息检索和缓存
- 时间线事件和笔记管理
- 管理员系统管理功能

### 使用说明
1. **环境变量设置**:
   - `base_url`: API服务器地址 (默认: http://localhost:5001)
   - `username`: 测试用户名
   - `password`: 测试密码

2. **认证流程**:
   - 首先调用注册或登录接口
   - 系统会自动设置会话Cookie
   - 后续请求会自动携带认证信息

3. **测试顺序**:
   - 建议按模块顺序进行测试
   - 先完成用户认证
   - 再进行业务功能测试

### 开发者信息
- **维护团队**: CharacterNetwork开发团队
- **联系方式**: support@characternetwork.com
- **文档更新**: ${generated_at}"#;

pub const QUICK_DESCRIPTION: &str = "## CharacterNetwork API文档\n\n**生成时间**: ${generated_at}\n\n### 快速开始\n1. 设置环境变量 `base_url`\n2. 先运行认证接口\n3. 按模块顺序测试\n\n### 技术栈\n- Express.js + TypeScript\n- PostgreSQL + Drizzle ORM\n- Session认证机制";

pub const FULL_VARIABLES: &[(&str, &str, &str)] = &[
    (
        "base_url",
        DEFAULT_BASE_URL,
        "API服务器基础URL，根据环境切换（开发/测试/生产）",
    ),
    ("api_version", "v1", "API版本号"),
    ("timeout", "10000", "请求超时时间(毫秒)"),
];

pub const QUICK_VARIABLES: &[(&str, &str, &str)] = &[("base_url", DEFAULT_BASE_URL, "API服务器地址")];

pub const PREREQUEST_SCRIPT: &[&str] = &[
    "// 全局预请求脚本",
    "// 设置请求时间戳",
    "pm.globals.set('request_timestamp', new Date().getTime());",
    "",
    "// 检查基础URL设置",
    "if (!pm.environment.get('base_url') && !pm.globals.get('base_url')) {",
    "    console.log('警告：未设置base_url，使用默认值');",
    "    pm.globals.set('base_url', 'http://localhost:5001');",
    "}",
    "",
    "// 设置通用请求头",
    "pm.request.headers.add({",
    "    key: 'User-Agent',",
    "    value: 'CharacterNetwork-Postman-Collection/1.0.0'",
    "});",
];

pub const TEST_SCRIPT: &[&str] = &[
    "// 全局测试脚本",
    "// 记录API调用日志",
    "const requestTime = pm.globals.get('request_timestamp');",
    "const responseTime = new Date().getTime();",
    "const duration = responseTime - parseInt(requestTime);",
    "",
    "console.log(`API调用: ${pm.request.method} ${pm.request.url} - ${pm.response.code} (${duration}ms)`);",
    "",
    "// 通用响应验证",
    "pm.test('响应Content-Type验证', function () {",
    "    const contentType = pm.response.headers.get('Content-Type');",
    "    if (contentType) {",
    "        pm.expect(contentType).to.include('application/json');",
    "    }",
    "});",
    "",
    "// 错误响应统一处理",
    "if (pm.response.code >= 400) {",
    "    pm.test('错误响应包含message字段', function () {",
    "        try {",
    "            const jsonData = pm.response.json();",
    "            pm.expect(jsonData).to.have.property('message');",
    "        } catch (e) {",
    "            console.log('响应不是有效的JSON格式');",
    "        }",
    "    });",
    "}",
];
